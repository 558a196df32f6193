#[cfg(test)]
pub mod test_helpers {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::app::App;
    use crate::config::Config;
    use crate::fetch::{SuggestClient, SuggestRequest, SuggestResponse};

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    /// Stand in for the worker: returns its ends of the app's channels
    pub fn connect_channels(
        app: &mut App,
    ) -> (
        tokio::sync::mpsc::UnboundedReceiver<SuggestRequest>,
        std::sync::mpsc::Sender<SuggestResponse>,
    ) {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = std::sync::mpsc::channel();
        app.set_channels(request_tx, response_rx);
        (request_rx, response_tx)
    }

    /// Type text into the focused field one key at a time
    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    /// Client that never goes through a system proxy (tests talk to localhost)
    pub fn local_client() -> SuggestClient {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("test client should build");
        SuggestClient::from_http(http)
    }

    /// Serve exactly one HTTP response, returning the request line received
    pub fn spawn_http_stub(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap() == 0 || header == "\r\n" {
                    break;
                }
            }
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            request_line.trim_end().to_string()
        });

        (base_url, handle)
    }

    /// Listener that accepts connections but never answers
    pub fn silent_server() -> (String, TcpListener) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        (base_url, listener)
    }
}
