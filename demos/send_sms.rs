use std::io;

use mollie_sms::{Gateway, GatewayClient, Message, MessageConfig};

fn required_env(name: &str) -> Result<String, io::Error> {
    std::env::var(name).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{name} environment variable is required"),
        )
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let username = required_env("MOLLIE_USERNAME")?;
    let password = required_env("MOLLIE_PASSWORD")?;
    let originator = required_env("MOLLIE_ORIGINATOR")?;
    let phone = required_env("MOLLIE_PHONE")?;
    let body = std::env::var("MOLLIE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the mollie-sms demo.".to_owned());
    let gateway = match std::env::var("MOLLIE_GATEWAY") {
        Ok(value) => value.parse::<Gateway>()?,
        Err(_) => Gateway::default(),
    };

    let config = MessageConfig::new(username, password, originator).with_gateway(gateway);
    let client = GatewayClient::new();
    let message = Message::new(&config).to(phone).with_body(body);

    let response = client.deliver_or_fail(&message).await?;
    println!(
        "{response} (known: {:?})",
        response.result_code().known().map(|code| code.description())
    );

    Ok(())
}
