use actix_web::error::InternalError;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use actix_cors::Cors;
use serde::Serialize;
use std::sync::Arc;
use vakfinder_core::{Company, CompanyId, Error, LocalRating, MatchRequest};
use vakfinder_matching::{MatchOutcome, MatchingService};
use vakfinder_ranking::{SimilarCompany, SimilarityScore};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CompanySummary {
    id: CompanyId,
    name: String,
    slug: String,
    city: String,
    categories: Vec<String>,
    specialties: Vec<String>,
    is_verified: bool,
    local_rating: Option<LocalRating>,
    external_rating: Option<f64>,
    #[serde(rename = "match", skip_serializing_if = "Option::is_none")]
    similarity: Option<SimilarityScore>,
}

impl From<Company> for CompanySummary {
    fn from(company: Company) -> Self {
        let local_rating = company.effective_local_rating();
        let external_rating = company.effective_external_rating();
        Self {
            id: company.id,
            name: company.name,
            slug: company.slug,
            city: company.city,
            categories: company.categories,
            specialties: company.specialties,
            is_verified: company.is_verified,
            local_rating,
            external_rating,
            similarity: None,
        }
    }
}

impl From<SimilarCompany> for CompanySummary {
    fn from(similar: SimilarCompany) -> Self {
        Self {
            similarity: Some(similar.score),
            ..Self::from(similar.company)
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MatchResponse {
    ok: bool,
    companies: Vec<CompanySummary>,
    used_fallback: bool,
}

impl From<MatchOutcome> for MatchResponse {
    fn from(outcome: MatchOutcome) -> Self {
        Self {
            ok: true,
            companies: outcome.companies.into_iter().map(Into::into).collect(),
            used_fallback: outcome.used_fallback,
        }
    }
}

#[derive(Serialize)]
struct SimilarResponse {
    ok: bool,
    anchor: CompanySummary,
    companies: Vec<CompanySummary>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        service: Arc<MatchingService>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(service.clone()))
                .configure(RestApi::routes)
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }

    pub fn routes(cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
            let response = bad_request(&err.to_string());
            InternalError::from_response(err, response).into()
        }))
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            let response = bad_request(&err.to_string());
            InternalError::from_response(err, response).into()
        }))
        .route("/health", web::get().to(health))
            .route("/match", web::get().to(match_query))
            .route("/match", web::post().to(match_body))
            .route("/companies/{anchor}/similar", web::get().to(similar_companies))
            .route("/companies/{anchor}/context", web::get().to(company_context));
    }
}

fn failure_body(message: &str) -> serde_json::Value {
    serde_json::json!({
        "ok": false,
        "message": message
    })
}

/// Unparseable query string or body
fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(failure_body(message))
}

fn error_response(e: &Error) -> HttpResponse {
    let body = failure_body(&e.to_string());
    match e {
        Error::MissingCriteria(_) => HttpResponse::BadRequest().json(body),
        Error::AnchorNotFound(_) => HttpResponse::NotFound().json(body),
        Error::StoreUnavailable(_) => {
            tracing::error!(error = %e, "store unavailable");
            HttpResponse::ServiceUnavailable().json(body)
        }
        _ => {
            tracing::error!(error = %e, "matching failed");
            HttpResponse::InternalServerError().json(body)
        }
    }
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "ok": true,
        "version": env!("CARGO_PKG_VERSION")
    })))
}

async fn run_match(service: &MatchingService, request: &MatchRequest) -> HttpResponse {
    match service.match_request(request).await {
        Ok(outcome) => HttpResponse::Ok().json(MatchResponse::from(outcome)),
        Err(e) => error_response(&e),
    }
}

async fn match_query(
    service: web::Data<Arc<MatchingService>>,
    query: web::Query<MatchRequest>,
) -> ActixResult<HttpResponse> {
    Ok(run_match(&service, &query).await)
}

async fn match_body(
    service: web::Data<Arc<MatchingService>>,
    req: web::Json<MatchRequest>,
) -> ActixResult<HttpResponse> {
    Ok(run_match(&service, &req).await)
}

async fn similar_companies(
    service: web::Data<Arc<MatchingService>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let anchor = path.into_inner();

    match service.find_similar(&anchor).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(SimilarResponse {
            ok: true,
            anchor: outcome.anchor.into(),
            companies: outcome.companies.into_iter().map(Into::into).collect(),
        })),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn company_context(
    service: web::Data<Arc<MatchingService>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let anchor = path.into_inner();

    match service.match_context(&anchor).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(MatchResponse::from(outcome))),
        Err(e) => Ok(error_response(&e)),
    }
}
