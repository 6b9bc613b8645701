use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use deadpool_redis::{redis, Pool};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use tracing::warn;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    redis: &'static str,
}

fn probe_status(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "unhealthy"
    }
}

/// Liveness: answers without touching any dependency.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

async fn database_ready(db: &DatabaseConnection) -> bool {
    let result = db
        .execute(Statement::from_string(
            db.get_database_backend(),
            "SELECT 1",
        ))
        .await;

    if let Err(e) = &result {
        warn!("Readiness: database ping failed: {}", e);
    }
    result.is_ok()
}

async fn redis_ready(pool: &Pool) -> bool {
    let mut conn = match pool.get().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Readiness: redis pool unavailable: {}", e);
            return false;
        }
    };

    match redis::cmd("PING").query_async::<String>(&mut conn).await {
        Ok(_) => true,
        Err(e) => {
            warn!("Readiness: redis ping failed: {}", e);
            false
        }
    }
}

/// Readiness: PostgreSQL and Redis must both answer.
#[get("/ready")]
pub async fn readiness(
    db: web::Data<Arc<DatabaseConnection>>,
    redis_pool: web::Data<Arc<Pool>>,
) -> impl Responder {
    let (db_ok, redis_ok) = futures::join!(database_ready(&db), redis_ready(&redis_pool));

    let body = ReadinessResponse {
        status: probe_status(db_ok && redis_ok),
        database: probe_status(db_ok),
        redis: probe_status(redis_ok),
    };

    if db_ok && redis_ok {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
