//! Integration tests driving the registry and the reporting aggregator
//! together, the way the dashboard does: seed, mutate through the service,
//! then derive the report from `list()`.

use std::time::Duration;

use chrono::{TimeZone, Utc};
use padron::config::RegistryConfig;
use padron::fixtures;
use padron::prelude::*;
use padron::reporting;

fn seeded() -> InMemoryPartnerService {
    InMemoryPartnerService::with_partners(fixtures::sample_partners()).latency(Duration::ZERO)
}

fn new_partner(first: &str, last: &str) -> NewPartner {
    NewPartner {
        first_name: first.to_string(),
        last_name: last.to_string(),
        dni: "55667788".to_string(),
        phone: "944332211".to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        join_date: Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap(),
        property: Property::new("C", "07", ConstructionStatus::Unbuilt),
    }
}

#[tokio::test]
async fn report_over_seeded_registry_matches_known_figures() {
    let service = seeded();
    let partners = service.list().await.unwrap();
    let now = Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap();

    let report = DashboardReport::build(&partners, now);

    assert_eq!(report.partner_count, 3);
    assert_eq!(report.total_collected, 270.0);
    // Payments after 2023-11-01: Juan 50+20, Maria 100
    assert_eq!(report.collected_last_30_days, 170.0);
    assert!(report.collected_last_30_days <= report.total_collected);

    let recent: Vec<&str> = report
        .recent_partners
        .iter()
        .map(|p| p.first_name.as_str())
        .collect();
    assert_eq!(recent, ["Carlos", "Juan", "Maria"]);
}

#[tokio::test]
async fn created_partner_shows_up_in_report() {
    let service = seeded();

    let ana = service.create(new_partner("Ana", "Torres")).await.unwrap();
    assert_eq!(ana.id, 4);
    assert!(ana.payments.is_empty());
    assert!(ana.attendance.is_empty());

    service
        .record_payment(
            ana.id,
            NewPayment {
                date: Utc.with_ymd_and_hms(2023, 12, 2, 0, 0, 0).unwrap(),
                payment_type: PaymentType::Electricity,
                amount: 30.0,
                receipt_number: "R006".to_string(),
            },
        )
        .await
        .unwrap()
        .unwrap();

    let partners = service.list().await.unwrap();
    let now = Utc.with_ymd_and_hms(2023, 12, 3, 0, 0, 0).unwrap();
    let report = DashboardReport::build(&partners, now);

    assert_eq!(report.partner_count, 4);
    assert_eq!(report.total_collected, 300.0);

    // Newest joiner leads the recent list, Electricity appears last in the
    // breakdown (first seen last).
    assert_eq!(report.recent_partners[0].id, ana.id);
    let last_slice = report.payment_breakdown.last().unwrap();
    assert_eq!(last_slice.payment_type, PaymentType::Electricity);
    assert_eq!(last_slice.total, 30.0);
}

#[tokio::test]
async fn delete_removes_partner_from_listing_and_report() {
    let service = seeded();

    assert!(service.delete(1).await.unwrap());
    assert!(service.get(1).await.unwrap().is_none());

    let partners = service.list().await.unwrap();
    assert_eq!(partners.len(), 2);

    // Juan's 120 is gone
    assert_eq!(reporting::total_collected(&partners), 150.0);

    // Deleting again is a no-op
    assert!(!service.delete(1).await.unwrap());
    assert_eq!(service.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn update_through_service_preserves_histories() {
    let service = seeded();

    let updated = service
        .update(
            2,
            PartnerUpdate {
                phone: Some("900900900".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.phone, "900900900");
    assert_eq!(updated.first_name, "Maria");
    assert_eq!(updated.payments.len(), 2);
    assert_eq!(updated.attendance.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn operations_resolve_after_the_simulated_delay() {
    // Default latency, paused clock: tokio auto-advances time across the
    // sleep, so the elapsed virtual time is observable and exact.
    let service = InMemoryPartnerService::new();

    let started = tokio::time::Instant::now();
    service.list().await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn configured_latency_is_honored() {
    let config = RegistryConfig::from_yaml_str("latency_ms: 120").unwrap();
    let service = InMemoryPartnerService::with_latency(config.latency());

    let started = tokio::time::Instant::now();
    service.get(1).await.unwrap();
    assert_eq!(started.elapsed(), Duration::from_millis(120));
}
