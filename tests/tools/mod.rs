#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

/// A request as seen by the fake server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// A canned answer, written verbatim after the request is read.
pub struct Reply(pub Vec<u8>);

impl Reply {
    pub fn json(status: &str, body: &str) -> Reply {
        Reply(
            format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
            .into_bytes(),
        )
    }

    pub fn chunked(body: &str) -> Reply {
        let (head, tail) = body.split_at(body.len() / 2);
        Reply(
            format!(
                "HTTP/1.1 200 OK\r\nTransfer-Encoding: chunked\r\n\r\n{:x}\r\n{}\r\n{:x}\r\n{}\r\n0\r\n\r\n",
                head.len(),
                head,
                tail.len(),
                tail
            )
            .into_bytes(),
        )
    }
}

fn read_request(stream: &mut TcpStream) -> Recorded {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).unwrap();
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap().to_string();
    let path = parts.next().unwrap().to_string();

    let mut headers = Vec::new();
    loop {
        line.clear();
        reader.read_line(&mut line).unwrap();
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            break;
        }
        let (k, v) = trimmed.split_once(':').unwrap();
        headers.push((k.trim().to_string(), v.trim().to_string()));
    }

    let len = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .map_or(0, |(_, v)| v.parse().unwrap());
    let mut body = vec![0; len];
    reader.read_exact(&mut body).unwrap();

    Recorded {
        method,
        path,
        headers,
        body,
    }
}

/// Serve one connection per reply, in order, then close the listener.
///
/// Returns the port and a handle yielding every request received.
pub fn start_recording_server(replies: Vec<Reply>) -> (u16, JoinHandle<Vec<Recorded>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move || {
        let mut recorded = Vec::new();
        for reply in replies {
            let (mut stream, _) = listener.accept().unwrap();
            recorded.push(read_request(&mut stream));
            stream.write_all(&reply.0).unwrap();
        }
        recorded
    });

    (port, handle)
}

/// A port nothing listens on.
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

pub fn base_url(port: u16) -> String {
    format!("http://127.0.0.1:{}/candlepin/test/", port)
}
