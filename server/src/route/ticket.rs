use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use application::service::{CreateTicketService, GetTicketService, GetTicketTypesService};

use crate::auth::AuthorizedUser;
use crate::controller::Controller;
use crate::error::{BadRequest, ErrorStatus};
use crate::handler::AppModule;

use self::request::{CreateTicketRequest, Transformer};
use self::response::{CreatedPresenter, Presenter};

mod request;
mod response;

pub trait TicketRouter {
    fn route_ticket(self) -> Self;
}

impl TicketRouter for Router<AppModule> {
    fn route_ticket(self) -> Self {
        self.route(
            "/tickets/types",
            get(
                |State(module): State<AppModule>, _: AuthorizedUser| async move {
                    Controller::new((), Presenter)
                        .bypass(|| async move { module.pgpool().get_ticket_types().await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/tickets",
            get(
                |State(module): State<AppModule>, user: AuthorizedUser| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(user)
                        .handle(|dto| async move { module.pgpool().get_ticket(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 user: AuthorizedUser,
                 WithRejection(Json(req), _): WithRejection<Json<CreateTicketRequest>, BadRequest>| async move {
                    Controller::new(Transformer, CreatedPresenter)
                        .intake((user, req))
                        .handle(|dto| async move { module.pgpool().create_ticket(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
