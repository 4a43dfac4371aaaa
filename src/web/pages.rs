//! Page handlers: resolve the backend calls for a route, fetch, render.
//!
//! Backend failures never reach the user as errors. Each fetch falls back
//! independently (empty list, empty chart, or placeholder text) and the
//! failure is logged.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    backend::types::{MetricPoint, Narrative, Player, MISSING_TEAM},
    cli::types::{ids::PlayerId, time::MetricsWindow},
    web::{chart::ChartView, AppState},
};


pub const SITE_TITLE: &str = "FansApprove Rating";
pub const NO_NARRATIVE: &str = "No narratives available yet.";
pub const UNKNOWN_PLAYER: &str = "Unknown player";

/// Search parameters of the home page (`/?q=..`)
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomePage {
    pub title: &'static str,
    pub query: String,
    pub players: Vec<Player>,
}

#[derive(Template, WebTemplate)]
#[template(path = "player.html")]
pub struct PlayerPage {
    pub title: &'static str,
    pub name: String,
    pub team: String,
    pub active: bool,
    pub window: MetricsWindow,
    pub chart: ChartView,
    pub metrics: Vec<MetricPoint>,
    pub narrative: Option<Narrative>,
    pub no_narrative: &'static str,
}

impl PlayerPage {
    pub fn new(
        player: Option<Player>,
        window: MetricsWindow,
        metrics: Vec<MetricPoint>,
        narrative: Option<Narrative>,
    ) -> Self {
        let (name, team, active) = match player {
            Some(p) => {
                let team = p.team_label().to_string();
                (p.full_name, team, p.active)
            }
            None => (UNKNOWN_PLAYER.to_string(), MISSING_TEAM.to_string(), true),
        };

        Self {
            title: SITE_TITLE,
            name,
            team,
            active,
            window,
            chart: ChartView::from_points(&metrics),
            metrics,
            narrative,
            no_narrative: NO_NARRATIVE,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub title: &'static str,
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Health {
    pub status: String,
}

/// Day whose narrative the detail page shows: the latest metric point's
/// day, or `today` when the window has no metrics.
pub fn narrative_date(metrics: &[MetricPoint], today: NaiveDate) -> NaiveDate {
    metrics.last().map(|p| p.date).unwrap_or(today)
}

/// `GET /`
pub async fn home(State(state): State<AppState>, Query(params): Query<SearchParams>) -> HomePage {
    let query = params.q.unwrap_or_default();

    let players = state
        .backend
        .search_players(Some(query.as_str()))
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, query = %query, "player search failed; rendering empty list");
            Vec::new()
        });

    HomePage {
        title: SITE_TITLE,
        query,
        players,
    }
}

/// `GET /players/{id}`
pub async fn player_detail(
    State(state): State<AppState>,
    Path(id): Path<PlayerId>,
) -> PlayerPage {
    let today = state.clock.today();
    let window = MetricsWindow::ending(today);

    let (player, metrics) = tokio::join!(
        state.backend.get_player(&id),
        state.backend.get_metrics(&id, window)
    );

    let player = player
        .map_err(|e| warn!(error = %e, player = %id, "player lookup failed"))
        .ok();
    let metrics = metrics.unwrap_or_else(|e| {
        warn!(error = %e, player = %id, "metrics fetch failed; rendering empty chart");
        Vec::new()
    });

    let date = narrative_date(&metrics, today);
    let narrative = state
        .backend
        .get_narrative(&id, date)
        .await
        .map_err(|e| warn!(error = %e, player = %id, %date, "no narrative"))
        .ok();

    PlayerPage::new(player, window, metrics, narrative)
}

/// `GET /health`
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundPage {
            title: SITE_TITLE,
            path: uri.path().to_string(),
        },
    )
}
