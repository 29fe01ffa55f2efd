use crate::api;
use crate::displays;
use crate::result;
use crate::structs::{DisplayType, Selection, Stop, TransitType};

pub const MISSING_FIELDS_ALERT: &str = "Please select transit type, stop, and display type";
pub const SENT_FALLBACK_MESSAGE: &str = "Sent to display";

/// What the user should be told after pressing submit.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was empty; nothing was sent.
    Incomplete,
    Sent(String),
    Failed(String),
}

impl SubmitOutcome {
    pub fn alert_text(&self) -> String {
        match self {
            SubmitOutcome::Incomplete => MISSING_FIELDS_ALERT.to_string(),
            SubmitOutcome::Sent(message) => message.clone(),
            SubmitOutcome::Failed(reason) => format!("Failed to send to display: {}", reason),
        }
    }
}

/// Handle for an in-flight stop list request. Only the newest one issued by
/// a controller is allowed to replace the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingStops {
    generation: u64,
    pub transit_type: TransitType,
}

pub struct FormController<A: api::StopsApi> {
    api: A,
    require_stop_id: bool,

    transit_type: Option<TransitType>,
    stop_text: String,
    stop_id: Option<String>,
    suggestions: Vec<Stop>,
    display_options: Vec<DisplayType>,
    selected_display: Option<DisplayType>,

    generation: u64,
}

impl<A: api::StopsApi> FormController<A> {
    pub fn new(api: A, require_stop_id: bool) -> FormController<A> {
        return FormController {
            api: api,
            require_stop_id: require_stop_id,
            transit_type: None,
            stop_text: "".to_string(),
            stop_id: None,
            suggestions: vec![],
            display_options: vec![],
            selected_display: None,
            generation: 0,
        };
    }

    pub fn transit_type(&self) -> Option<&TransitType> {
        return self.transit_type.as_ref();
    }

    pub fn stop_text(&self) -> &str {
        return &self.stop_text;
    }

    pub fn stop_id(&self) -> Option<&str> {
        return self.stop_id.as_ref().map(String::as_str);
    }

    pub fn suggestions(&self) -> &[Stop] {
        return &self.suggestions;
    }

    pub fn display_options(&self) -> &[DisplayType] {
        return &self.display_options;
    }

    pub fn selected_display(&self) -> Option<DisplayType> {
        return self.selected_display;
    }

    /// Switches the form to `transit_type`: fetches its stops and rebuilds
    /// the display options. A failed fetch leaves an empty suggestion list.
    pub fn change_transit_type(&mut self, transit_type: TransitType) {
        let pending = self.begin_transit_type_change(transit_type);
        let stops = self.api.fetch_stops(&pending.transit_type);
        self.complete_stops(&pending, stops);
    }

    /// First half of a type change. The display options are rebuilt
    /// immediately; the stop list waits for `complete_stops`.
    pub fn begin_transit_type_change(&mut self, transit_type: TransitType) -> PendingStops {
        self.generation += 1;

        info!("Transit type -> {}", transit_type);
        self.display_options = displays::display_options(&transit_type);
        self.selected_display = None;
        self.transit_type = Some(transit_type.clone());

        return PendingStops {
            generation: self.generation,
            transit_type: transit_type,
        };
    }

    /// Applies a stop list response. Returns false when `pending` has been
    /// superseded by a later type change and the response was dropped.
    pub fn complete_stops(&mut self, pending: &PendingStops, stops: result::PtvSelectResult<Vec<Stop>>) -> bool {
        if pending.generation != self.generation {
            debug!("Dropping stale stop list for {} (request {}, current {})",
                   pending.transit_type, pending.generation, self.generation);
            return false;
        }

        self.suggestions = match stops {
            Ok(stops) => {
                debug!("{} stops for {}", stops.len(), pending.transit_type);
                stops
            },
            Err(err) => {
                warn!("Couldn't fetch stops for {}: {}", pending.transit_type, err);
                vec![]
            },
        };

        // The typed stop may not exist for the new type.
        self.update_stop_id();
        return true;
    }

    pub fn on_stop_input(&mut self, text: &str) {
        self.stop_text = text.to_string();
        self.update_stop_id();
    }

    fn update_stop_id(&mut self) {
        let stop_text = &self.stop_text;
        self.stop_id = self.suggestions.iter()
            .find(|s| &s.stop_name == stop_text)
            .and_then(|s| s.stop_id.clone());
    }

    /// Checks the display radio for `display_type`. Only rendered options
    /// can be selected.
    pub fn select_display(&mut self, display_type: DisplayType) -> bool {
        if !self.display_options.contains(&display_type) {
            warn!("{} is not offered for {:?}", display_type, self.transit_type);
            return false;
        }

        self.selected_display = Some(display_type);
        return true;
    }

    /// The payload that would be submitted, or None if a required field is
    /// missing.
    pub fn selection(&self) -> Option<Selection> {
        let transit_type = self.transit_type.as_ref()
            .map(|t| t.as_str())
            .filter(|t| !t.is_empty())?;
        let display_type = self.selected_display?;

        if self.stop_text.is_empty() {
            return None;
        }

        // Lists from older servers carry names only; there is no id to demand.
        let ids_offered = self.suggestions.iter().any(|s| s.stop_id.is_some());
        if self.require_stop_id && ids_offered && self.stop_id.is_none() {
            return None;
        }

        return Some(Selection {
            transit_type: transit_type.to_string(),
            stop_name: self.stop_text.clone(),
            stop_id: self.stop_id.clone(),
            display_type: display_type,
        });
    }

    pub fn submit_selection(&self) -> SubmitOutcome {
        let selection = match self.selection() {
            Some(selection) => selection,
            None => {
                info!("Not submitting incomplete selection: type={:?} stop='{}' id={:?} display={:?}",
                      self.transit_type, self.stop_text, self.stop_id, self.selected_display);
                return SubmitOutcome::Incomplete;
            },
        };

        info!("Sending {} '{}' ({:?}) to {}",
              selection.transit_type, selection.stop_name, selection.stop_id, selection.display_type);

        match self.api.send_to_display(&selection) {
            Ok(response) => {
                return SubmitOutcome::Sent(
                    response.message.unwrap_or(SENT_FALLBACK_MESSAGE.to_string()));
            },
            Err(err) => {
                error!("send-to-display failed: {}", err);
                return SubmitOutcome::Failed(err.to_string());
            },
        }
    }
}
