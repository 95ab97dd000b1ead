use kube_extdns_infrastructure::dns::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

const RECV_BUFFER_SIZE: usize = 4096;

pub async fn start_dns_server(
    bind_addr: SocketAddr,
    handler: DnsServerHandler,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let socket = Arc::new(create_udp_socket(bind_addr)?);
    let handler = Arc::new(handler);

    info!(bind_address = %bind_addr, "DNS server ready");

    let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("DNS server shutting down");
                break;
            }
            result = socket.recv_from(&mut recv_buf) => {
                match result {
                    Ok((n, from)) => {
                        let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
                        let handler = handler.clone();
                        let socket = socket.clone();
                        tokio::spawn(async move {
                            if let Some(response) = handler.handle_raw(&owned_buf).await {
                                if let Err(e) = socket.send_to(&response, from).await {
                                    debug!(client = %from, error = %e, "Failed to send DNS reply");
                                }
                            }
                        });
                    }
                    Err(e) => {
                        error!(error = %e, "UDP recv error");
                    }
                }
            }
        }
    }

    Ok(())
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
