use folio_catalog::{
    core::settings::{Settings, SETTINGS_PATH},
    get_projects, logger, server, validate, Result,
};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<()> {
    logger::init_logger();

    let projects = get_projects();
    validate(projects)?;
    info!("Catalog holds {} projects", projects.len());

    let settings = Settings::load(SETTINGS_PATH)?;
    server::start_server(settings.addr()).await
}
