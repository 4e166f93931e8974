use std::{env, fmt::Debug, sync::Arc};

use battlesnake_sidewinder::{
    strategies::SweepStrategy,
    turn::TurnProcessor,
    wire::models::{Empty, GameState},
};
use color_eyre::{eyre::WrapErr, Result};
use log::{debug, error, info};
use serde::Serialize;
use warp::{http::Method, hyper::body::Bytes, Filter};

const NAME: &str = env!("CARGO_PKG_NAME");
const DEFAULT_PORT: u16 = 8080;
const INDEX_BODY: &str = "Battlesnake documentation can be found at <a \
                          href=\"https://docs.battlesnake.io\">https://docs.\
                          battlesnake.io</a>.";

fn parse_snapshot(snapshot: &Bytes) -> Result<GameState> {
    serde_json::from_slice(snapshot).wrap_err("malformed game snapshot")
}

/// Serializes a turn outcome, downgrading any failure to an empty payload.
/// A bad turn must never surface as a transport error.
fn respond<T: Serialize + Debug>(outcome: Result<T>) -> warp::reply::Json {
    match outcome {
        Ok(payload) => {
            debug!("responding with {payload:?}");
            warp::reply::json(&payload)
        }
        Err(report) => {
            error!("failed to handle turn: {report:#}");
            warp::reply::json(&Empty {})
        }
    }
}

fn port_from_env() -> Result<u16> {
    match env::var("PORT") {
        Ok(port) => {
            info!("found environment provided port: {port}");
            port.parse().wrap_err("PORT must be a number")
        }
        Err(_) => {
            info!("using default port: {DEFAULT_PORT}");
            Ok(DEFAULT_PORT)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let port = port_from_env()?;
    let processor = Arc::new(TurnProcessor::new(SweepStrategy));

    let cors = warp::cors()
        .allow_method(Method::GET)
        .allow_method(Method::POST)
        .allow_header("content-type")
        .allow_any_origin();

    let logging = warp::log(NAME);

    let index = warp::get()
        .and(warp::path::end())
        .map(|| warp::reply::html(INDEX_BODY));

    let start = warp::post()
        .and(warp::path("start"))
        .and(warp::body::bytes())
        .map({
            let processor = Arc::clone(&processor);
            move |snapshot: Bytes| {
                respond(
                    parse_snapshot(&snapshot)
                        .and_then(|state| processor.start(&state)),
                )
            }
        });

    let ping = warp::post()
        .and(warp::path("ping"))
        .and(warp::body::bytes())
        .map({
            let processor = Arc::clone(&processor);
            move |_snapshot: Bytes| respond(Ok(processor.ping()))
        });

    let do_move = warp::post()
        .and(warp::path("move"))
        .and(warp::body::bytes())
        .map({
            let processor = Arc::clone(&processor);
            move |snapshot: Bytes| {
                respond(
                    parse_snapshot(&snapshot)
                        .and_then(|state| processor.make_move(&state)),
                )
            }
        });

    let end = warp::post()
        .and(warp::path("end"))
        .and(warp::body::bytes())
        .map({
            let processor = Arc::clone(&processor);
            move |_snapshot: Bytes| respond(Ok(processor.end()))
        });

    let api = index
        .or(start)
        .or(ping)
        .or(do_move)
        .or(end)
        .with(cors)
        .with(logging);

    warp::serve(api).run(([0, 0, 0, 0], port)).await;

    Ok(())
}
