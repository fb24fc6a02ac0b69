use std::fmt::Display;

/// Machine readable status reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    Ok,
    NoRouteFound,
    CouldNotConnectPointToNetwork,
    TravelTimeExceeded,
    UnknownException,
    GatewayTimeout,
    Other(String),
}

impl ResponseCode {
    pub fn as_str(&self) -> &str {
        match self {
            ResponseCode::Ok => "ok",
            ResponseCode::NoRouteFound => "no-route-found",
            ResponseCode::CouldNotConnectPointToNetwork => "could-not-connect-point-to-network",
            ResponseCode::TravelTimeExceeded => "travel-time-exceeded",
            ResponseCode::UnknownException => "unknown-exception",
            ResponseCode::GatewayTimeout => "gateway-time-out",
            ResponseCode::Other(code) => code,
        }
    }

    /// Codes the service sends with HTTP 200 when it could not answer the request.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ResponseCode::NoRouteFound
                | ResponseCode::CouldNotConnectPointToNetwork
                | ResponseCode::TravelTimeExceeded
                | ResponseCode::UnknownException
        )
    }
}

impl From<&str> for ResponseCode {
    fn from(code: &str) -> Self {
        match code {
            "ok" => ResponseCode::Ok,
            "no-route-found" => ResponseCode::NoRouteFound,
            "could-not-connect-point-to-network" => ResponseCode::CouldNotConnectPointToNetwork,
            "travel-time-exceeded" => ResponseCode::TravelTimeExceeded,
            "unknown-exception" => ResponseCode::UnknownException,
            "gateway-time-out" => ResponseCode::GatewayTimeout,
            other => ResponseCode::Other(other.to_owned()),
        }
    }
}

impl Display for ResponseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_names() {
        for code in [
            "ok",
            "no-route-found",
            "could-not-connect-point-to-network",
            "travel-time-exceeded",
            "unknown-exception",
            "gateway-time-out",
            "something-new",
        ] {
            assert_eq!(ResponseCode::from(code).as_str(), code);
        }
    }

    #[test]
    fn test_failures() {
        assert!(ResponseCode::from("no-route-found").is_failure());
        assert!(ResponseCode::from("unknown-exception").is_failure());
        assert!(!ResponseCode::Ok.is_failure());
        assert!(!ResponseCode::GatewayTimeout.is_failure());
        assert!(!ResponseCode::from("something-new").is_failure());
    }
}
