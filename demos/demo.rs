//! Walkthrough of every temp-mail client operation.
//!
//! Features demonstrated:
//! - Creating a client (with optional timeout / proxy)
//! - Viewing available email domains
//! - Generating a random address
//! - Polling for incoming messages
//! - Fetching a message and its raw source
//! - Deleting the message
//!
//! Run with `RUST_LOG=tempmail_client=debug` to see each request.

use std::time::{Duration, Instant};
use tempmail_client::{Client, mailbox_id};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tempmail_client=info")),
        )
        .init();

    println!("📧 temp-mail Rust Client - Full Demo");
    println!("{}", "=".repeat(50));

    // =========================================
    // 1. Create client
    // =========================================
    let client = Client::builder()
        .timeout(Duration::from_secs(15))
        // .proxy("socks5://127.0.0.1:9050")
        .build()?;
    println!("\n🔌 Using {}", client.base_url());

    // =========================================
    // 2. View available domains
    // =========================================
    println!("\n🌐 Available email domains:");
    for domain in client.list_domains().await? {
        println!("   - {}", domain);
    }

    // =========================================
    // 3. Generate a random address
    // =========================================
    let email = client.generate_email().await?;
    println!("\n📬 Generated: {}", email);
    println!("   Mailbox id: {}", mailbox_id(&email));

    // =========================================
    // 4. Poll for messages
    // =========================================
    println!("\n⏳ Send an email to {} (polling for up to 2 minutes)", email);

    let start = Instant::now();
    let timeout = Duration::from_secs(120);
    let poll_interval = Duration::from_secs(5);

    let message = loop {
        let messages = client.get_messages(&email).await?;
        if let Some(first) = messages.as_array().and_then(|list| list.first()) {
            break Some(first.clone());
        }

        if start.elapsed() >= timeout {
            break None;
        }
        tokio::time::sleep(poll_interval).await;
    };

    let Some(message) = message else {
        println!("\n⚠️  Timeout: No messages received");
        return Ok(());
    };

    let Some(mail_id) = message["mail_id"].as_str() else {
        println!("\n⚠️  Message without mail_id: {message}");
        return Ok(());
    };

    // =========================================
    // 5. Fetch message and raw source
    // =========================================
    println!("\n📥 From:    {}", message["mail_from"]);
    println!("   Subject: {}", message["mail_subject"]);

    let full = client.get_message(mail_id).await?;
    println!("\n📄 Message:\n{full:#}");

    let source = client.get_message_source(mail_id).await?;
    println!("\n🧾 Source:\n{source:#}");

    // =========================================
    // 6. Delete the message
    // =========================================
    match client.delete_message(mail_id).await {
        Ok(status) => println!("\n🗑️  Delete status: {status}"),
        Err(e) => eprintln!("\n❌ Error: {}", e),
    }

    println!("\n{}", "=".repeat(50));
    println!("✨ Demo complete!");

    Ok(())
}
