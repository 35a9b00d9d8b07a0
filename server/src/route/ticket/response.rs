use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::OffsetDateTime;

use application::transfer::{TicketDto, TicketTypeDto};

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeResponse {
    id: i32,
    name: String,
    price: i32,
    is_remote: bool,
    includes_hotel: bool,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
}

impl From<TicketTypeDto> for TicketTypeResponse {
    fn from(dto: TicketTypeDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            price: dto.price,
            is_remote: dto.is_remote,
            includes_hotel: dto.includes_hotel,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    id: i32,
    status: String,
    ticket_type_id: i32,
    enrollment_id: i32,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    updated_at: OffsetDateTime,
    #[serde(rename = "TicketType")]
    ticket_type: TicketTypeResponse,
}

impl From<TicketDto> for TicketResponse {
    fn from(dto: TicketDto) -> Self {
        Self {
            id: dto.id,
            status: dto.status,
            ticket_type_id: dto.ticket_type.id,
            enrollment_id: dto.enrollment_id,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            ticket_type: TicketTypeResponse::from(dto.ticket_type),
        }
    }
}

#[derive(Debug)]
pub struct CreatedTicketResponse(TicketResponse);

impl IntoResponse for CreatedTicketResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

pub struct Presenter;

impl Exhaust<Vec<TicketTypeDto>> for Presenter {
    type To = Json<Vec<TicketTypeResponse>>;
    fn emit(&self, input: Vec<TicketTypeDto>) -> Self::To {
        Json(input.into_iter().map(TicketTypeResponse::from).collect())
    }
}

impl Exhaust<TicketDto> for Presenter {
    type To = Json<TicketResponse>;
    fn emit(&self, input: TicketDto) -> Self::To {
        Json(TicketResponse::from(input))
    }
}

pub struct CreatedPresenter;

impl Exhaust<TicketDto> for CreatedPresenter {
    type To = CreatedTicketResponse;
    fn emit(&self, input: TicketDto) -> Self::To {
        CreatedTicketResponse(TicketResponse::from(input))
    }
}
