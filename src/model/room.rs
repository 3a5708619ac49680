use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dormitory building, serialized by its block code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Building {
    #[serde(rename = "R+G1")]
    G1,
    #[serde(rename = "R+F2")]
    F2,
    #[serde(rename = "R+G3")]
    G3,
    #[serde(rename = "R+F4")]
    F4,
    #[serde(rename = "R+M1")]
    M1,
    #[serde(rename = "R+GZ")]
    Gz,
}

impl Building {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::G1 => "R+G1",
            Self::F2 => "R+F2",
            Self::G3 => "R+G3",
            Self::F4 => "R+F4",
            Self::M1 => "R+M1",
            Self::Gz => "R+GZ",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "R+G1" => Some(Self::G1),
            "R+F2" => Some(Self::F2),
            "R+G3" => Some(Self::G3),
            "R+F4" => Some(Self::F4),
            "R+M1" => Some(Self::M1),
            "R+GZ" => Some(Self::Gz),
            _ => None,
        }
    }
}

/// Room availability state. A room is `Available` only while unreserved;
/// the reservation engine flips it to `Occupied` when a reservation claims
/// it and back when the reservation is cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    #[serde(rename = "DISPO")]
    Available,
    #[serde(rename = "OCCUP")]
    Occupied,
    #[serde(rename = "BPOS")]
    SoonAvailable,
    #[serde(rename = "HS")]
    OutOfService,
}

impl RoomStatus {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Available => "DISPO",
            Self::Occupied => "OCCUP",
            Self::SoonAvailable => "BPOS",
            Self::OutOfService => "HS",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "DISPO" => Some(Self::Available),
            "OCCUP" => Some(Self::Occupied),
            "BPOS" => Some(Self::SoonAvailable),
            "HS" => Some(Self::OutOfService),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct RoomDto {
    pub id: i32,
    pub building: Building,
    pub floor: String,
    pub description: String,
    pub price: Decimal,
    pub status: RoomStatus,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CreateRoomDto {
    pub building: Building,
    pub floor: String,
    pub description: String,
    pub price: Decimal,
    /// Defaults to `Available` when omitted.
    pub status: Option<RoomStatus>,
}

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct UpdateRoomDto {
    pub building: Option<Building>,
    pub floor: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub status: Option<RoomStatus>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct RoomIdsDto {
    pub ids: Vec<i32>,
}
