//! WebSocket server and connection handling.

use crate::protocol::{ClientMessage, ServerMessage};
use crate::session::Session;
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{accept_async, tungstenite::Message, WebSocketStream};
use tracing::{error, info, warn};
use uuid::Uuid;

type WsSender = SplitSink<WebSocketStream<TcpStream>, Message>;

/// Run the WebSocket server.
pub async fn run_server(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Tic-Tac-Toe server listening on {}", addr);

    while let Ok((stream, peer_addr)) = listener.accept().await {
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer_addr).await {
                error!("Connection error from {}: {}", peer_addr, e);
            }
        });
    }

    Ok(())
}

/// Handle a single WebSocket connection. The connection owns its session
/// for its whole lifetime.
async fn handle_connection(stream: TcpStream, addr: SocketAddr) -> anyhow::Result<()> {
    let ws_stream = accept_async(stream).await?;
    info!("New WebSocket connection from {}", addr);

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let mut session = Session::new(Uuid::new_v4());

    for msg in session.greeting() {
        send(&mut ws_sender, &msg).await?;
    }

    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                let replies = match serde_json::from_str::<ClientMessage>(&text) {
                    Ok(client_msg) => session.handle(client_msg),
                    Err(e) => {
                        warn!("Invalid message from {}: {}", session.id, text);
                        vec![ServerMessage::Error {
                            message: format!("Invalid message: {}", e),
                        }]
                    }
                };
                for reply in replies {
                    send(&mut ws_sender, &reply).await?;
                }
            }
            Ok(Message::Close(_)) => {
                info!("Client {} closing connection", session.id);
                break;
            }
            Ok(Message::Ping(_)) => {
                send(&mut ws_sender, &ServerMessage::Pong).await?;
            }
            Err(e) => {
                error!("WebSocket error from {}: {}", session.id, e);
                break;
            }
            _ => {}
        }
    }

    info!("Connection closed for {}", session.id);
    Ok(())
}

/// Serialize and send one message
async fn send(ws_sender: &mut WsSender, msg: &ServerMessage) -> anyhow::Result<()> {
    let text = serde_json::to_string(msg)?;
    ws_sender.send(Message::Text(text)).await?;
    Ok(())
}
