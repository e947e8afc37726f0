//! Seeds the registry with the sample dataset, registers one more partner,
//! and prints the dashboard report.
//!
//! Run with: `cargo run --example dashboard`

use std::time::Duration;

use padron::fixtures;
use padron::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let service = InMemoryPartnerService::with_partners(fixtures::sample_partners())
        .latency(Duration::from_millis(50));

    let ana = service
        .create(NewPartner {
            first_name: "Ana".to_string(),
            last_name: "Torres".to_string(),
            dni: "44556677".to_string(),
            phone: "955443322".to_string(),
            email: "ana.torres@example.com".to_string(),
            join_date: Utc::now(),
            property: Property::new("C", "03", ConstructionStatus::Unbuilt),
        })
        .await?;
    tracing::info!(id = ana.id, "registered {}", ana.full_name());

    service
        .record_payment(
            ana.id,
            NewPayment {
                date: Utc::now(),
                payment_type: PaymentType::Registration,
                amount: 100.0,
                receipt_number: "R006".to_string(),
            },
        )
        .await?;

    let partners = service.list().await?;
    let report = DashboardReport::build(&partners, Utc::now());

    println!("Socios: {}", report.partner_count);
    println!("Recaudación total: S/ {:.2}", report.total_collected);
    println!(
        "Recaudado (últimos 30 días): S/ {:.2}",
        report.collected_last_30_days
    );

    println!("\nAsistencia:");
    for point in &report.attendance {
        println!("  {:<14} {}", point.label, point.attended);
    }

    println!("\nDistribución de pagos:");
    for slice in &report.payment_breakdown {
        println!("  {:<16} S/ {:.2}", slice.payment_type.to_string(), slice.total);
    }

    println!("\nSocios recientes:");
    for partner in &report.recent_partners {
        println!(
            "  {:<20} {}  Mz. {}, Lt. {}",
            partner.full_name(),
            partner.join_date.format("%d/%m/%Y"),
            partner.property.block,
            partner.property.lot
        );
    }

    Ok(())
}
