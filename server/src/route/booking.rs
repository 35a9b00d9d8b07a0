use axum::extract::{Path, State};
use axum::routing::{get, put};
use axum::{Json, Router};
use axum_extra::extract::WithRejection;

use application::service::{CreateBookingService, GetBookingService, UpdateBookingService};

use crate::auth::AuthorizedUser;
use crate::controller::Controller;
use crate::error::{BadRequest, ErrorStatus};
use crate::handler::AppModule;

use self::request::{BookingRequest, Transformer};
use self::response::Presenter;

mod request;
mod response;

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/booking",
            get(
                |State(module): State<AppModule>, user: AuthorizedUser| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(user)
                        .handle(|dto| async move { module.pgpool().get_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 user: AuthorizedUser,
                 WithRejection(Json(req), _): WithRejection<Json<BookingRequest>, BadRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((user, req))
                        .handle(|dto| async move { module.pgpool().create_booking(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/booking/:bookingId",
            put(
                |State(module): State<AppModule>,
                 user: AuthorizedUser,
                 WithRejection(Path(booking_id), _): WithRejection<Path<i32>, BadRequest>,
                 WithRejection(Json(req), _): WithRejection<Json<BookingRequest>, BadRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((user, booking_id, req))
                        .handle(|dto| async move {
                            let booking = module.pgpool().update_booking(dto).await?;
                            Ok::<_, error_stack::Report<kernel::KernelError>>(booking.id)
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
