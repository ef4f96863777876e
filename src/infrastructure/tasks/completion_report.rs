//! Completion Report Task
//!
//! Posts one report per finished job. Delivery is best effort: a report that
//! fails or times out is logged and dropped.

use core::fmt::Write;

use embassy_net::{
    Stack,
    dns::DnsSocket,
    tcp::client::{TcpClient, TcpClientState},
};
use embassy_time::with_timeout;
#[cfg(feature = "log")]
use esp_println::println;
use heapless::String;
use reqwless::{
    client::HttpClient,
    headers::ContentType,
    request::{Method, RequestBuilder},
};
use static_cell::make_static;
use web2wire_core::{
    JobData,
    report::{CompletionReport, encode_report},
};

use crate::{
    config::DEVICE_NAME,
    infrastructure::{
        config::{COMPLETION, CompletionConfig},
        services::{CompletionReceiver, get_completion_receiver},
    },
};

const REPORT_BUFFER_SIZE: usize = 256;
const RESPONSE_BUFFER_SIZE: usize = 1024;

type ReportTcpState = TcpClientState<1, 1024, 1024>;

#[derive(Debug)]
enum ReportError {
    Encode,
    Request(reqwless::Error),
    Status(u16),
    Timeout,
}

impl From<reqwless::Error> for ReportError {
    fn from(error: reqwless::Error) -> Self {
        ReportError::Request(error)
    }
}

#[embassy_executor::task]
pub async fn completion_report_task(stack: Stack<'static>) {
    let receiver: CompletionReceiver = get_completion_receiver();
    let tcp_state = make_static!(ReportTcpState::new());

    loop {
        let job = receiver.receive().await;

        let result = with_timeout(
            COMPLETION.timeout,
            post_report(stack, tcp_state, &COMPLETION, &job),
        )
        .await
        .unwrap_or(Err(ReportError::Timeout));

        match result {
            Ok(()) => {
                #[cfg(feature = "log")]
                println!("report: delivered '{}'", job.name);
            }
            Err(_e) => {
                #[cfg(feature = "log")]
                println!("report: dropped '{}': {:?}", job.name, _e);
            }
        }
    }
}

async fn post_report(
    stack: Stack<'static>,
    tcp_state: &ReportTcpState,
    config: &CompletionConfig,
    job: &JobData,
) -> Result<(), ReportError> {
    let mut body = [0u8; REPORT_BUFFER_SIZE];
    let body_len = encode_report(&CompletionReport::completed(job, DEVICE_NAME), &mut body)
        .map_err(|_| ReportError::Encode)?;

    let mut authorization: String<160> = String::new();
    if let Some(token) = config.token {
        write!(authorization, "Bearer {}", token).map_err(|_| ReportError::Encode)?;
    }
    let headers = [("Authorization", authorization.as_str())];

    let tcp = TcpClient::new(stack, tcp_state);
    let dns = DnsSocket::new(stack);
    let mut client = HttpClient::new(&tcp, &dns);

    let request = client
        .request(Method::POST, config.url)
        .await?
        .body(&body[..body_len])
        .content_type(ContentType::ApplicationJson);
    let mut request = if config.token.is_some() {
        request.headers(&headers)
    } else {
        request
    };

    let mut rx_buffer = [0u8; RESPONSE_BUFFER_SIZE];
    let response = request.send(&mut rx_buffer).await?;

    let status = response.status.0;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ReportError::Status(status))
    }
}
