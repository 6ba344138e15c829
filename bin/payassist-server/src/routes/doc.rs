use crate::routes::{chat, health, root};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Smart Payment Assistant",
    description = "A chatbot for querying payment information",
    version = "1.0.0"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(root::RootApi::openapi());
    doc.merge(chat::ChatApi::openapi());
    doc.merge(health::HealthApi::openapi());
    doc
}
