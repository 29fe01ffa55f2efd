use crate::structs::{DisplayType, TransitType};

/// Which kinds of sign a selection for `transit_type` can be routed to.
pub fn display_options(transit_type: &TransitType) -> Vec<DisplayType> {
    match transit_type {
        TransitType::MetropolitanTrain => vec![DisplayType::Platform],
        TransitType::Tram => vec![DisplayType::TramDisplay],
        TransitType::Other(value) => {
            warn!("Not a valid transit type: '{}'", value);
            return vec![];
        }
    }
}
