use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::{MatchStore, StoreError};
use crate::models::{
    AddAndMatchResponse, AddPersonRequest, HealthResponse, PersonResponse, PossibleMatchesQuery,
    PossibleMatchesResponse, RemovePersonResponse,
};
use crate::routes::error::ApiError;
use crate::services::IdGenerator;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MatchStore>,
    pub ids: Arc<dyn IdGenerator>,
    pub max_results: u32,
}

impl AppState {
    pub fn new(store: Arc<MatchStore>, ids: Arc<dyn IdGenerator>, max_results: u32) -> Self {
        Self {
            store,
            ids,
            max_results,
        }
    }
}

/// Configure all person-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/add-and-match", web::post().to(add_and_match))
        .route("/person/{id}", web::get().to(get_person))
        .route("/person/{id}", web::delete().to(remove_person))
        .route("/person/{id}/matches", web::get().to(possible_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        people: state.store.stats(),
    })
}

/// Register a person and try to match them once
///
/// POST /api/v1/add-and-match
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "height": 180,
///   "gender": "male|female",
///   "number_of_wanted_dates": 3
/// }
/// ```
async fn add_and_match(
    state: web::Data<AppState>,
    req: web::Json<AddPersonRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for add_and_match request: {:?}", errors);
        return Err(errors.into());
    }

    let person = state
        .store
        .register(state.ids.as_ref(), req.attributes(), req.number_of_wanted_dates);

    let matched = match state.store.match_person(&person.id) {
        Ok(matched) => {
            tracing::info!("Registered {} and matched with {}", person.id, matched.id);
            Some(PersonResponse::from(matched))
        }
        Err(StoreError::NotFound) => {
            tracing::info!("Registered {} without a match", person.id);
            None
        }
    };

    Ok(HttpResponse::Ok().json(AddAndMatchResponse {
        person: PersonResponse::from(person),
        matched,
    }))
}

/// Fetch a person's current record
///
/// GET /api/v1/person/{id}
async fn get_person(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let person = state.store.get(&path)?;
    Ok(HttpResponse::Ok().json(person))
}

/// Remove a person
///
/// DELETE /api/v1/person/{id}
async fn remove_person(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    if let Err(e) = state.store.remove(&id) {
        tracing::warn!("Remove of unknown person {}", id);
        return Err(e.into());
    }
    tracing::info!("Removed {}", id);
    Ok(HttpResponse::Ok().json(RemovePersonResponse { success: true, id }))
}

/// List possible matches without consuming any dates
///
/// GET /api/v1/person/{id}/matches?n={n}
async fn possible_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PossibleMatchesQuery>,
) -> Result<HttpResponse, ApiError> {
    let n = parse_n(query.n.as_deref())?;
    // Cap n to keep the result set bounded
    let n = n.min(i64::from(state.max_results));

    let matches = state.store.possible_matches(&path, n)?;
    tracing::info!("Returning {} possible matches for {}", matches.len(), path.as_str());

    Ok(HttpResponse::Ok().json(PossibleMatchesResponse {
        matches: matches.into_iter().map(PersonResponse::from).collect(),
    }))
}

fn parse_n(raw: Option<&str>) -> Result<i64, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::BadRequest("query parameter `n` is required".to_string()))?;
    let n: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::BadRequest("query parameter `n` number is expected".to_string()))?;
    if n <= 0 {
        return Err(ApiError::BadRequest(
            "query parameter `n` positive number is expected".to_string(),
        ));
    }
    Ok(n)
}
