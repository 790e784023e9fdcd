use std::net::SocketAddr;

use actix_cors::Cors;
use actix_web::{
    middleware::Logger,
    web::{self, resource, scope, Path, ServiceConfig},
    App, HttpResponse, HttpServer,
};
use tracing::{info, warn};

use crate::{
    core::data::{get_project, get_projects},
    error::Result,
};

pub async fn start_server(addr: SocketAddr) -> Result<()> {
    let server = HttpServer::new(|| {
        App::new()
            .configure(routes)
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allowed_methods(vec!["GET"]),
            )
            .wrap(Logger::default())
    })
    .bind(addr)?;
    info!("Serving {} projects at http://{}/v1/projects", get_projects().len(), addr);
    server.run().await?;
    Ok(())
}

/// Read-only routes; the catalog is compiled in, so there is nothing to write.
pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/v1")
            .service(resource("/projects").route(web::get().to(list_handler)))
            .service(resource("/projects/{index}").route(web::get().to(project_handler)))
            .service(resource("/folio").route(web::get().to(status_handler))),
    );
}

async fn list_handler() -> HttpResponse {
    HttpResponse::Ok().json(get_projects())
}

async fn project_handler(index: Path<usize>) -> HttpResponse {
    let index = index.into_inner();
    match get_project(index) {
        Some(project) => HttpResponse::Ok().json(project),
        None => {
            warn!("No project at index {}", index);
            HttpResponse::NotFound().body(format!("No project at index {}", index))
        }
    }
}

async fn status_handler() -> HttpResponse {
    HttpResponse::Ok().body("folio is running")
}
