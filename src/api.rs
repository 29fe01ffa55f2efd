extern crate reqwest;
extern crate serde_json;
extern crate std;

use crate::config;
use crate::result;
use crate::structs::{Selection, SendToDisplayResponse, Stop, TransitType};

const STOPS_PATH: &str = "/api/stops";
const SEND_TO_DISPLAY_PATH: &str = "/api/send-to-display";

pub trait StopsApi {
    fn fetch_stops(&self, transit_type: &TransitType) -> result::PtvSelectResult<Vec<Stop>>;

    fn send_to_display(&self, selection: &Selection) -> result::PtvSelectResult<SendToDisplayResponse>;
}

pub struct HttpStopsApi {
    client: reqwest::blocking::Client,
    server_url: String,
}

impl HttpStopsApi {
    pub fn new(config: &config::Config) -> result::PtvSelectResult<HttpStopsApi> {
        // reqwest's blocking client times out after 30s unless told otherwise.
        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout_secs.map(std::time::Duration::from_secs))
            .build()?;

        return Ok(HttpStopsApi {
            client: client,
            server_url: config.server_url.trim_end_matches('/').to_string(),
        });
    }

    fn endpoint(&self, path: &str) -> String {
        return format!("{}{}", self.server_url, path);
    }
}

impl StopsApi for HttpStopsApi {
    fn fetch_stops(&self, transit_type: &TransitType) -> result::PtvSelectResult<Vec<Stop>> {
        let url = reqwest::Url::parse_with_params(
            &self.endpoint(STOPS_PATH), &[("type", transit_type.as_str())])
            .map_err(|err| result::make_error(&format!(
                "Bad server url '{}': {}", self.server_url, err)))?;
        debug!("Fetching {}", url);

        let response = self.client.get(url.clone()).send()?;

        if !response.status().is_success() {
            return Err(result::make_error(&format!(
                "{} answered {} for type {}", url, response.status(), transit_type)));
        }

        return parse_stops(&response.text()?);
    }

    fn send_to_display(&self, selection: &Selection) -> result::PtvSelectResult<SendToDisplayResponse> {
        let url = self.endpoint(SEND_TO_DISPLAY_PATH);
        debug!("POST {} {:?}", url, selection);

        let response = self.client.post(&url).json(selection).send()?;

        // The body is read regardless of status; servers put their
        // explanation in `message` either way.
        let status = response.status();
        if !status.is_success() {
            warn!("{} answered {}", url, status);
        }

        let body = response.text()?;
        match parse_send_response(&body) {
            Ok(parsed) => return Ok(parsed),
            Err(err) if !status.is_success() => {
                return Err(result::make_error(&format!("{} answered {}: {}", url, status, err)));
            },
            Err(err) => return Err(err),
        }
    }
}

fn parse_stops(response_body: &str) -> result::PtvSelectResult<Vec<Stop>> {
    let stops: Vec<Stop> = serde_json::from_str(response_body)?;
    return Ok(stops);
}

fn parse_send_response(response_body: &str) -> result::PtvSelectResult<SendToDisplayResponse> {
    let json: serde_json::Value = serde_json::from_str(response_body)?;

    let message = json.get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(|m| m.to_string());

    return Ok(SendToDisplayResponse { message: message });
}
