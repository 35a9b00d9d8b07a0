use axum::extract::{Path, State};
use axum::routing::get;
use axum::Router;
use axum_extra::extract::WithRejection;

use application::service::{GetHotelRoomsService, GetHotelsService};

use crate::auth::AuthorizedUser;
use crate::controller::Controller;
use crate::error::{BadRequest, ErrorStatus};
use crate::handler::AppModule;

use self::request::Transformer;
use self::response::Presenter;

pub(super) use self::response::RoomResponse;

mod request;
mod response;

pub trait HotelRouter {
    fn route_hotel(self) -> Self;
}

impl HotelRouter for Router<AppModule> {
    fn route_hotel(self) -> Self {
        self.route(
            "/hotels",
            get(
                |State(module): State<AppModule>, user: AuthorizedUser| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(user)
                        .handle(|dto| async move { module.pgpool().get_hotels(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/hotels/:hotelId",
            get(
                |State(module): State<AppModule>,
                 user: AuthorizedUser,
                 WithRejection(Path(hotel_id), _): WithRejection<Path<i32>, BadRequest>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((user, hotel_id))
                        .handle(|dto| async move { module.pgpool().get_hotel_rooms(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
