use axum::routing::get;
use axum::Router;

pub trait HealthRouter {
    fn route_health(self) -> Self;
}

impl<S> HealthRouter for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn route_health(self) -> Self {
        self.route("/health", get(|| async { "OK!" }))
    }
}
