use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// The listener the API is published on
///
/// The binary always runs with [`Config::default`], `0.0.0.0:8082`. Building one by hand is
/// only meant for tests that need another address.
#[derive(Debug, Clone)]
pub struct Config {
    pub address: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8082,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_published_listener() {
        assert_eq!(Config::default().socket_addr().to_string(), "0.0.0.0:8082");
    }
}
