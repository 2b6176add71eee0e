use crate::config::Config;
use crate::error::AppError;
use governor::{Quota, RateLimiter, state::{InMemoryState, NotKeyed}, clock::DefaultClock};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::endpoints;
use super::models::*;

const MAX_RETRIES: u32 = 3;
// The service's Retry-After is padded before sleeping.
const RETRY_AFTER_PAD_SECS: u64 = 2;
const DEFAULT_RETRY_AFTER_SECS: u64 = 5;

pub struct ApiClient {
    config: Config,
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout_read(Duration::from_secs(30))
            .user_agent("summoner_stats/0.1.0")
            .build();
        // 20 requests per second client-side pacing
        let rate_limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::new(20).unwrap()));
        ApiClient {
            config,
            agent,
            rate_limiter,
        }
    }

    fn retry_delay(retry_after: Option<&str>) -> Duration {
        let secs = retry_after
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        Duration::from_secs(secs + RETRY_AFTER_PAD_SECS)
    }

    /// GET `api_base + path_suffix` with the API key and the given query
    /// pairs attached, returning the response body.
    ///
    /// A 429 is retried after sleeping through the announced window, up to
    /// `MAX_RETRIES` times. Any other non-2xx status and any transport
    /// failure surface as typed errors without retrying.
    fn request(&self, path_suffix: &str, query: &[(&str, &str)]) -> Result<String, AppError> {
        let url = format!("{}{}", self.config.api_base, path_suffix);
        let mut attempt = 0;

        loop {
            while self.rate_limiter.check().is_err() {
                thread::sleep(Duration::from_millis(25));
            }

            let mut req = self
                .agent
                .get(&url)
                .query("api_key", &self.config.api_key);
            for (key, value) in query {
                req = req.query(key, value);
            }

            match req.call() {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| AppError::Io(e.to_string()));
                }
                Err(ureq::Error::Status(429, resp)) => {
                    if attempt >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let delay = Self::retry_delay(resp.header("Retry-After"));
                    println!("Rate limit reached. Resting for {} seconds.", delay.as_secs());
                    thread::sleep(delay);
                    attempt += 1;
                }
                Err(ureq::Error::Status(status, _)) => {
                    return Err(AppError::Http {
                        status,
                        path: path_suffix.to_string(),
                    });
                }
                Err(ureq::Error::Transport(_)) => {
                    return Err(AppError::Connectivity);
                }
            }
        }
    }

    /// Probe the status endpoint. True iff a JSON body came back.
    pub fn check_connection(&self) -> bool {
        match self.request(endpoints::STATUS, &[]) {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body).is_ok(),
            Err(_) => false,
        }
    }

    pub fn get_summoner_by_name(&self, name: &str) -> Result<SummonerDto, AppError> {
        // Names are pre-validated to alphanumerics and spaces; the space is
        // the only character that needs escaping in the path.
        let path = format!("{}/{}", endpoints::SUMMONER_BY_NAME, name.replace(' ', "%20"));
        let body = match self.request(&path, &[]) {
            Err(AppError::Http { status: 404, .. }) => {
                return Err(AppError::PlayerNotFound(name.to_string()));
            }
            other => other?,
        };
        serde_json::from_str(&body).map_err(|_| AppError::PlayerNotFound(name.to_string()))
    }

    pub fn get_matchlist(
        &self,
        account_id: &str,
        season: u32,
        queue: u32,
    ) -> Result<MatchlistDto, AppError> {
        let path = format!("{}/{}", endpoints::MATCHLIST_BY_ACCOUNT, account_id);
        let season = season.to_string();
        let queue = queue.to_string();
        let body = self.request(&path, &[("season", &season), ("queue", &queue)])?;
        serde_json::from_str(&body).map_err(|e| AppError::Json(e.to_string()))
    }

    /// Full match detail as raw JSON, so the cache file keeps the record
    /// exactly as the service returned it.
    pub fn get_match(&self, game_id: i64) -> Result<serde_json::Value, AppError> {
        let path = format!("{}/{}", endpoints::MATCH_BY_ID, game_id);
        let body = self.request(&path, &[])?;
        serde_json::from_str(&body).map_err(|e| AppError::Json(e.to_string()))
    }

    pub fn get_champion_masteries(
        &self,
        summoner_id: &str,
    ) -> Result<Vec<ChampionMasteryDto>, AppError> {
        let path = format!("{}/{}", endpoints::CHAMPION_MASTERIES, summoner_id);
        let body = self.request(&path, &[])?;
        serde_json::from_str(&body).map_err(|e| AppError::Json(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::time::Instant;

    fn test_client(base: String) -> ApiClient {
        ApiClient::new(Config {
            api_key: "test-key".to_string(),
            api_base: base,
            static_base: String::new(),
        })
    }

    /// Serve one canned response per connection, in order, then stop.
    fn stub_server(responses: Vec<String>) -> (String, thread::JoinHandle<usize>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let mut served = 0;
            for response in responses {
                let (mut stream, _) = listener.accept().unwrap();
                let mut buf = [0u8; 4096];
                let mut seen = Vec::new();
                loop {
                    let n = stream.read(&mut buf).unwrap();
                    seen.extend_from_slice(&buf[..n]);
                    if n == 0 || seen.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                stream.write_all(response.as_bytes()).unwrap();
                served += 1;
            }
            served
        });
        (base, handle)
    }

    fn rate_limited_response(retry_after: u64) -> String {
        format!(
            "HTTP/1.1 429 Too Many Requests\r\nRetry-After: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            retry_after
        )
    }

    fn ok_response(body: &str) -> String {
        format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        )
    }

    fn error_response(status: u16, reason: &str) -> String {
        format!(
            "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            status, reason
        )
    }

    #[test]
    fn retry_delay_pads_the_announced_window() {
        assert_eq!(ApiClient::retry_delay(Some("3")), Duration::from_secs(5));
        assert_eq!(ApiClient::retry_delay(Some("0")), Duration::from_secs(2));
        assert_eq!(
            ApiClient::retry_delay(None),
            Duration::from_secs(DEFAULT_RETRY_AFTER_SECS + RETRY_AFTER_PAD_SECS)
        );
        assert_eq!(
            ApiClient::retry_delay(Some("soon")),
            Duration::from_secs(DEFAULT_RETRY_AFTER_SECS + RETRY_AFTER_PAD_SECS)
        );
    }

    #[test]
    fn rate_limited_request_retries_once_after_sleeping() {
        let (base, handle) = stub_server(vec![
            rate_limited_response(3),
            ok_response("{\"ok\":true}"),
        ]);
        let client = test_client(base);

        let started = Instant::now();
        let body = client.request("anything", &[]).unwrap();
        let elapsed = started.elapsed();

        assert_eq!(handle.join().unwrap(), 2);
        assert_eq!(body, "{\"ok\":true}");
        // Retry-After: 3 plus the 2 second pad
        assert!(elapsed >= Duration::from_secs(5), "slept only {:?}", elapsed);
    }

    #[test]
    fn rate_limit_gives_up_after_the_retry_cap() {
        let responses: Vec<String> = (0..=MAX_RETRIES).map(|_| rate_limited_response(0)).collect();
        let (base, handle) = stub_server(responses);
        let client = test_client(base);

        let result = client.request("anything", &[]);
        assert!(matches!(result, Err(AppError::RateLimited)));
        assert_eq!(handle.join().unwrap() as u32, MAX_RETRIES + 1);
    }

    #[test]
    fn other_http_errors_surface_without_retry() {
        let (base, handle) = stub_server(vec![error_response(404, "Not Found")]);
        let client = test_client(base);

        let result = client.request("summoner/v4/summoners/by-name/Nobody", &[]);
        match result {
            Err(AppError::Http { status, path }) => {
                assert_eq!(status, 404);
                assert_eq!(path, "summoner/v4/summoners/by-name/Nobody");
            }
            other => panic!("expected Http error, got {:?}", other),
        }
        assert_eq!(handle.join().unwrap(), 1);
    }

    #[test]
    fn transport_failure_is_a_connectivity_error() {
        // Nothing listens on this port; bind and drop to reserve a dead one.
        let dead = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/", dead.local_addr().unwrap());
        drop(dead);
        let client = test_client(base);

        let result = client.request("anything", &[]);
        assert!(matches!(result, Err(AppError::Connectivity)));
    }

    #[test]
    fn connectivity_check_requires_a_json_body() {
        let (base, _handle) = stub_server(vec![ok_response("{\"services\":[]}")]);
        assert!(test_client(base).check_connection());

        let (base, _handle) = stub_server(vec![ok_response("not json")]);
        assert!(!test_client(base).check_connection());

        let dead = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}/", dead.local_addr().unwrap());
        drop(dead);
        assert!(!test_client(base).check_connection());
    }
}
