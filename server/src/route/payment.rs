use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_extra::extract::{Query, WithRejection};

use application::service::{GetPaymentService, ProcessPaymentService};

use crate::auth::AuthorizedUser;
use crate::controller::Controller;
use crate::error::{BadRequest, ErrorStatus};
use crate::handler::AppModule;

use self::request::{GetPaymentQuery, ProcessPaymentRequest, Transformer};
use self::response::Presenter;

mod request;
mod response;

pub trait PaymentRouter {
    fn route_payment(self) -> Self;
}

impl PaymentRouter for Router<AppModule> {
    fn route_payment(self) -> Self {
        self.route(
            "/payments",
            get(
                |State(module): State<AppModule>,
                 user: AuthorizedUser,
                 WithRejection(Query(req), _): WithRejection<Query<GetPaymentQuery>, BadRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((user, req))
                        .handle(|dto| async move { module.pgpool().get_payment(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/payments/process",
            post(
                |State(module): State<AppModule>,
                 user: AuthorizedUser,
                 WithRejection(Json(req), _): WithRejection<Json<ProcessPaymentRequest>, BadRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((user, req))
                        .handle(|dto| async move { module.pgpool().process_payment(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
