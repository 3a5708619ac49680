use serde::{Deserialize, Serialize};

/// Field of study offered by the university.
///
/// Stored and serialized by its short code (`INFO`, `MATHS`, `COMM`, `AGRO`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Major {
    #[serde(rename = "INFO")]
    ComputerScience,
    #[serde(rename = "MATHS")]
    Mathematics,
    #[serde(rename = "COMM")]
    Communication,
    #[serde(rename = "AGRO")]
    Agronomy,
}

impl Major {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::ComputerScience => "INFO",
            Self::Mathematics => "MATHS",
            Self::Communication => "COMM",
            Self::Agronomy => "AGRO",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "INFO" => Some(Self::ComputerScience),
            "MATHS" => Some(Self::Mathematics),
            "COMM" => Some(Self::Communication),
            "AGRO" => Some(Self::Agronomy),
            _ => None,
        }
    }
}

/// Academic level with an explicit ordinal (L1=1 through M2=5).
///
/// The ordinal drives the period-final-payment computation, so the enum
/// serializes as its integer value and ordering follows the ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum AcademicLevel {
    L1 = 1,
    L2 = 2,
    L3 = 3,
    M1 = 4,
    M2 = 5,
}

impl AcademicLevel {
    pub fn as_ordinal(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for AcademicLevel {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::L1),
            2 => Ok(Self::L2),
            3 => Ok(Self::L3),
            4 => Ok(Self::M1),
            5 => Ok(Self::M2),
            other => Err(format!("invalid academic level ordinal: {}", other)),
        }
    }
}

impl From<AcademicLevel> for i32 {
    fn from(level: AcademicLevel) -> i32 {
        level as i32
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct StudentDto {
    pub id: i32,
    pub matriculation_code: String,
    pub last_name: String,
    pub first_name: String,
    pub major: Major,
    pub level: AcademicLevel,
    pub phone: Option<String>,
    pub email: String,
    pub username: String,
}

/// Partial profile update. The matriculation code is immutable and has no
/// field here.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct UpdateStudentDto {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub major: Option<Major>,
    pub level: Option<AcademicLevel>,
    pub phone: Option<String>,
}
