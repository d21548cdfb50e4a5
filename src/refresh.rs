//! Startup history refresh
//!
//! Asks the Gemini API for a fresh history summary of the featured artist
//! and merges it into the library. Best-effort: every failure class
//! (missing credential, network, empty response, store I/O) downgrades to
//! a warning and the server starts with whatever the library already
//! holds. Runs exactly once, fully awaited before the listener binds.

use tracing::{info, warn};

use crate::gemini::GeminiClient;
use crate::model::Library;
use crate::store::LibraryStore;
use crate::{Error, Result};

/// Library key of the artist whose history gets refreshed at startup.
pub const FEATURED_ARTIST_KEY: &str = "led_zeppelin";

/// Fixed prompt sent to the model. Brazilian Portuguese, matching the
/// language of the served site.
const HISTORY_PROMPT: &str = r#"Aja como um especialista da história do rock n roll. Forneça um resumo bem escrito, sucinto e envolvente sobre a história da banda Led Zeppelin em no máximo 3 parágrafos, inclua datas importantes e destaque os álbuns mais aclamados junto a público e crítica. O texto deve conter apenas a informação solicitada, não inclua na resposta nada do tipo "Claro, aqui está um resumo da história do Led Zeppelin em 3 parágrafos:".Evite caracteres especiais, não use asteriscos apenas devem estar presentes acentos ortográficos pertinentes ao português do Brasil, não invente nada."#;

/// Refresh the featured artist's history text in the store.
///
/// Never fails: errors are logged and the previous library contents stay
/// untouched, so a missing API key or an offline API cannot block startup.
pub async fn refresh_featured_history(store: &dyn LibraryStore, api_key: Option<&str>) {
    info!("Refreshing featured artist history");

    match try_refresh(store, api_key).await {
        Ok(()) => info!("Featured artist history updated in the library"),
        Err(e) => {
            warn!("Could not refresh the featured artist history: {}", e);
            warn!("The server will start with the existing library data");
        }
    }
}

async fn try_refresh(store: &dyn LibraryStore, api_key: Option<&str>) -> Result<()> {
    let api_key =
        api_key.ok_or_else(|| Error::Config("GOOGLE_API_KEY is not set".to_string()))?;

    let client = GeminiClient::new(api_key)?;
    let text = client.generate_text(HISTORY_PROMPT).await?;

    let mut library = store.load().await?;
    apply_history(&mut library, FEATURED_ARTIST_KEY, &text);
    store.save(&library).await?;

    Ok(())
}

/// Merge a generated history text into the library, creating the artist
/// entry when absent and leaving its album list alone.
fn apply_history(library: &mut Library, key: &str, text: &str) {
    let record = library.entry(key.to_string()).or_default();
    record.history = text.trim().to_string();
}
