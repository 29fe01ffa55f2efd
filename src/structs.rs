extern crate serde;

pub const METROPOLITAN_TRAIN: &str = "Metropolitan-Train";
pub const TRAM: &str = "Tram";

// Radio values from the transit type picker. Anything else is kept verbatim
// so it can still be forwarded to the stops endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitType {
    MetropolitanTrain,
    Tram,
    Other(String),
}

impl TransitType {
    pub fn parse(value: &str) -> TransitType {
        match value.trim() {
            METROPOLITAN_TRAIN => TransitType::MetropolitanTrain,
            TRAM => TransitType::Tram,
            other => TransitType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TransitType::MetropolitanTrain => METROPOLITAN_TRAIN,
            TransitType::Tram => TRAM,
            TransitType::Other(value) => value.as_str(),
        }
    }
}

impl std::fmt::Display for TransitType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        return write!(f, "{}", self.as_str());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayType {
    Platform,
    TramDisplay,
}

impl DisplayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayType::Platform => "platform",
            DisplayType::TramDisplay => "tram_display",
        }
    }

    pub fn parse(value: &str) -> Option<DisplayType> {
        match value.trim() {
            "platform" => Some(DisplayType::Platform),
            "tram_display" => Some(DisplayType::TramDisplay),
            _ => None,
        }
    }
}

impl std::fmt::Display for DisplayType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        return write!(f, "{}", self.as_str());
    }
}

/// One entry of the stop suggestion list.
///
/// Older servers answered `/api/stops` with bare stop names, so `stop_id`
/// is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawStop")]
pub struct Stop {
    pub stop_name: String,
    pub stop_id: Option<String>,
}

#[cfg(test)]
impl Stop {
    pub fn new(stop_name: &str, stop_id: &str) -> Stop {
        return Stop {
            stop_name: stop_name.to_string(),
            stop_id: Some(stop_id.to_string()),
        };
    }

    pub fn name_only(stop_name: &str) -> Stop {
        return Stop {
            stop_name: stop_name.to_string(),
            stop_id: None,
        };
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStop {
    Full {
        stop_name: String,
        #[serde(default)]
        stop_id: Option<StopId>,
    },
    NameOnly(String),
}

// Ids come back as strings from the current server but as numbers from the
// PTV-backed one.
#[derive(Deserialize)]
#[serde(untagged)]
enum StopId {
    Text(String),
    Number(i64),
}

impl From<RawStop> for Stop {
    fn from(raw: RawStop) -> Stop {
        match raw {
            RawStop::Full { stop_name, stop_id } => Stop {
                stop_name: stop_name,
                stop_id: stop_id.map(|id| match id {
                    StopId::Text(text) => text,
                    StopId::Number(number) => number.to_string(),
                }).filter(|id| !id.is_empty()),
            },
            RawStop::NameOnly(stop_name) => Stop {
                stop_name: stop_name,
                stop_id: None,
            },
        }
    }
}

/// The JSON body POSTed to `/api/send-to-display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub transit_type: String,
    pub stop_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_id: Option<String>,
    pub display_type: DisplayType,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SendToDisplayResponse {
    pub message: Option<String>,
}
