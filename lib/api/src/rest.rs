use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use stylist_core::{
    AttributeVocabulary, Catalog, ClothingItemInput, Error, ErrorKind, ItemSummary, Outfit,
    Preferences, Stylist,
};
use tracing::{error, warn};

/// State shared read-only by every request
pub struct AppState {
    pub stylist: Stylist,
    pub catalog: Arc<Catalog>,
    pub vocabulary: Arc<AttributeVocabulary>,
}

#[derive(Deserialize)]
struct SuggestOutfitRequest {
    #[serde(default)]
    clothes: Vec<ClothingItemInput>,
    #[serde(flatten)]
    preferences: Preferences,
}

#[derive(Serialize)]
struct OutfitResponse {
    outfits: Vec<Vec<ItemSummary>>,
}

#[derive(Serialize)]
struct HealthResponse {
    title: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct CatalogInfo {
    items_count: usize,
    vector_dim: usize,
}

#[derive(Serialize)]
struct VocabularyInfo<'a> {
    #[serde(flatten)]
    vocabulary: &'a AttributeVocabulary,
    dim: usize,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: Arc<AppState>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .configure(RestApi::routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.route("/health", web::get().to(health))
            .route("/catalog", web::get().to(catalog_info))
            .route("/vocabulary", web::get().to(vocabulary_info))
            .route("/suggest-outfit", web::post().to(suggest_outfit));
    }
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        title: "stylist",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

async fn catalog_info(state: web::Data<Arc<AppState>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "result": CatalogInfo {
            items_count: state.catalog.len(),
            vector_dim: state.catalog.embedding_dim(),
        }
    })))
}

async fn vocabulary_info(state: web::Data<Arc<AppState>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(VocabularyInfo {
        vocabulary: &state.vocabulary,
        dim: state.vocabulary.dim(),
    }))
}

async fn suggest_outfit(
    state: web::Data<Arc<AppState>>,
    req: web::Json<SuggestOutfitRequest>,
) -> ActixResult<HttpResponse> {
    let req = req.into_inner();

    match suggest_guarded(&state.stylist, &req.clothes, &req.preferences) {
        Ok(outfits) => Ok(HttpResponse::Ok().json(OutfitResponse {
            outfits: outfits.iter().map(Outfit::summaries).collect(),
        })),
        Err(e) => Ok(error_response(&e)),
    }
}

fn suggest_guarded(
    stylist: &Stylist,
    clothes: &[ClothingItemInput],
    preferences: &Preferences,
) -> Result<Vec<Outfit>, Error> {
    guarded(|| stylist.suggest(clothes, preferences))
}

/// Run `f`, turning a panic into [`Error::Unexpected`]
fn guarded<T, F>(f: F) -> Result<T, Error>
where
    F: FnOnce() -> Result<T, Error>,
{
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(Error::Unexpected(message))
    })
}

fn error_response(e: &Error) -> HttpResponse {
    match e.kind() {
        ErrorKind::Client => {
            warn!("Rejected outfit request: {}", e);
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
        ErrorKind::Internal => {
            error!("Outfit suggestion failed: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": e.to_string()
            }))
        }
    }
}
