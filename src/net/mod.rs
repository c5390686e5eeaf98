mod external_ip;
pub mod transport;

pub use external_ip::{resolve_ip, ResolvedIp, FALLBACK_IP};
pub use transport::{HttpResponse, HttpTransport, Transport, TransportError};
