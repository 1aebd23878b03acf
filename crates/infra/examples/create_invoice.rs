//! Example: find-or-create a customer, invoice them, book and email
//!
//! # Setup
//!
//! 1. Put credentials in `.env` (or the environment):
//!    ```text
//!    DINERO_CLIENT_ID=...
//!    DINERO_CLIENT_SECRET=...
//!    DINERO_API_KEY=...
//!    DINERO_ORGANIZATION_ID=...
//!    ```
//!    A `dinero.toml` / `dinero.json` in the working directory works too.
//!
//! 2. Run this example: `cargo run -p dinero-infra --example create_invoice`
//!
//! Set `RUST_LOG=dinero_infra=debug` to see every request.

use dinero_domain::{Contact, DineroError, EmailSettings, Invoice, InvoiceLine, Unit};
use dinero_infra::{config, DineroClient};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let client = DineroClient::new(config::load()?)?;

    let customer = Contact {
        email: Some("jane@example.com".into()),
        street: Some("Vestergade 1".into()),
        zip_code: Some("8000".into()),
        city: Some("Aarhus".into()),
        ..Contact::person("Jane Doe", "DK")
    };

    let mut invoice = Invoice::default();
    invoice.description = Some("Consulting, October".into());
    invoice.currency = Some("DKK".into());
    let invoice = invoice
        .with_line(InvoiceLine::new(
            "Architecture review",
            6.0,
            Unit::Hours,
            950.0,
            1000,
        ))
        .with_line(
            InvoiceLine::new("Travel", 1.0, Unit::Session, 400.0, 1000).with_comments("Aarhus C"),
        );

    let created = match client
        .create_invoice(&invoice, Some(&customer.into()), true)
        .await
    {
        Ok(created) => created,
        Err(DineroError::BookingFailed { invoice, source }) => {
            tracing::warn!(error = %source, "Booking failed, retrying once");
            client
                .book_invoice(invoice.guid(), invoice.timestamp())
                .await?;
            *invoice
        }
        Err(DineroError::AmbiguousContact { matches }) => {
            eprintln!("{matches} contacts match Jane Doe; pass an identified contact instead");
            return Ok(());
        }
        Err(other) => return Err(other.into()),
    };
    println!("Booked invoice {}", created.guid());

    let mut email = EmailSettings::new();
    email.insert("Subject".into(), json!("Your invoice from Example ApS"));
    client.send_invoice_email(created.guid(), email).await?;
    println!("Emailed invoice {}", created.guid());

    Ok(())
}
