use embassy_net::tcp::TcpSocket;
use embedded_io_async::Write as _;
use heapless::{String, Vec};
use serde::Serialize;

use super::{
    Error,
    HttpResult,
    headers::{
        ContentHeaders,
        ContentType,
        HttpMethod,
        RequestHeaders,
        ResponseHeaders,
        StatusCode,
        TargetWriter as _,
        TextEncoding,
        parse_request_headers,
        parse_request_line,
        read_heading,
        split_target,
    },
};

const HEADER_BUFFER_SIZE: usize = 1024;
const BODY_BUFFER_SIZE: usize = 1024;
const BODY_RX_CHUNK_SIZE: usize = 256;
const STREAM_CHUNK_SIZE: usize = 1024;

const PATH_SIZE: usize = 64;
const QUERY_SIZE: usize = 384;

/// HTTP connection context
pub(crate) struct HttpConnection<'a> {
    pub method: HttpMethod,
    pub path: String<PATH_SIZE>,
    pub query: String<QUERY_SIZE>,
    pub headers: RequestHeaders,

    socket: TcpSocket<'a>,
    header_end: usize,
    header_buf: Vec<u8, HEADER_BUFFER_SIZE>,
    body_buf: Vec<u8, BODY_BUFFER_SIZE>,
}

impl<'a> HttpConnection<'a> {
    /// Create a new HTTP connection from a socket.
    ///
    /// Returns `None` when the peer closed without sending a request.
    pub(crate) async fn from_socket(
        mut socket: TcpSocket<'a>,
    ) -> Result<Option<Self>, Error> {
        let mut header_buf = Vec::<u8, HEADER_BUFFER_SIZE>::new();
        header_buf
            .resize(HEADER_BUFFER_SIZE, 0)
            .map_err(|()| Error::TooLarge)?;
        let (header_end, header_len) =
            read_heading(header_buf.as_mut_slice(), &mut socket).await?;
        if header_len == 0 {
            return Ok(None);
        }
        header_buf.truncate(header_len);

        // Body bytes read along with the headers may be binary
        let header_str = core::str::from_utf8(&header_buf[..header_end])
            .map_err(|_| Error::Parse)?;
        let (method, target, rest_headers) =
            parse_request_line(header_str).ok_or(Error::Parse)?;
        let (raw_path, raw_query) = split_target(target);

        let path = raw_path.try_into().map_err(|()| Error::TooLarge)?;
        let query = raw_query.try_into().map_err(|()| Error::TooLarge)?;
        let headers = parse_request_headers(rest_headers);

        Ok(Some(Self {
            method,
            path,
            query,
            headers,
            socket,
            header_end,
            header_buf,
            body_buf: Vec::new(),
        }))
    }

    /// Get request method and path
    pub(crate) fn route(&self) -> (HttpMethod, &'_ str) {
        (self.method, self.path.as_str())
    }

    pub(crate) fn content_type(&self) -> Option<&str> {
        self.headers.content_type.as_deref()
    }

    pub(crate) fn authorization(&self) -> Option<&str> {
        self.headers.authorization.as_deref()
    }

    /// Write the headers to the connection
    pub(crate) async fn write_headers(
        &mut self,
        headers: &ResponseHeaders,
    ) -> HttpResult {
        self.header_buf.clear();
        headers.write_to(&mut self.header_buf)?;
        self.socket.write_all(self.header_buf.as_slice()).await?;
        self.socket.flush().await?;

        Ok(())
    }

    /// Write the body to the connection
    pub(crate) async fn write_body(&mut self, body: &[u8]) -> HttpResult {
        for chunk in body.chunks(STREAM_CHUNK_SIZE) {
            self.socket.write_all(chunk).await?;
        }
        self.socket.flush().await?;
        Ok(())
    }

    /// Write an HTML document with the given status
    pub(crate) async fn write_html(
        &mut self,
        status: StatusCode,
        html: &str,
    ) -> HttpResult {
        let content = ContentHeaders::new(ContentType::TextHtml)
            .with_text_encoding(TextEncoding::Utf8)
            .with_length(html.len());
        let headers = ResponseHeaders::from_code(status).with_content(content);

        self.write_headers(&headers).await?;
        self.write_body(html.as_bytes()).await
    }

    /// Write JSON with the given status
    ///
    /// Writes both headers and body.
    pub(crate) async fn write_json<T: Serialize>(
        &mut self,
        status: StatusCode,
        data: &T,
    ) -> HttpResult {
        self.body_buf.clear();
        self.body_buf
            .resize(BODY_BUFFER_SIZE, 0)
            .map_err(|()| Error::TooLarge)?;
        let n = serde_json_core::to_slice(data, self.body_buf.as_mut_slice())
            .map_err(|_| Error::TooLarge)?;
        self.body_buf.truncate(n);
        let headers = ResponseHeaders::from_code(status)
            .with_content(ContentHeaders::new(ContentType::Json).with_length(n));

        self.write_headers(&headers).await?;
        self.socket.write_all(self.body_buf.as_slice()).await?;
        self.socket.flush().await?;
        Ok(())
    }

    /// Read the request body
    ///
    /// A request without `Content-Length` has an empty body.
    pub(crate) async fn read_body(&mut self) -> Result<&[u8], Error> {
        let content_length = self.headers.content_length as usize;
        if content_length > BODY_BUFFER_SIZE {
            return Err(Error::TooLarge);
        }

        self.body_buf.clear();
        if content_length == 0 {
            return Ok(&[]);
        }

        let tail = self.header_buf.get(self.header_end..).unwrap_or(&[]);
        let tail = &tail[..tail.len().min(content_length)];
        self.body_buf
            .extend_from_slice(tail)
            .map_err(|()| Error::TooLarge)?;

        while self.body_buf.len() < content_length {
            let mut buf = [0u8; BODY_RX_CHUNK_SIZE];
            let wanted = (content_length - self.body_buf.len()).min(buf.len());
            let n = self.socket.read(&mut buf[..wanted]).await?;
            if n == 0 {
                break;
            }
            self.body_buf
                .extend_from_slice(&buf[..n])
                .map_err(|()| Error::TooLarge)?;
        }

        Ok(self.body_buf.as_slice())
    }
}
