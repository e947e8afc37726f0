//! Canonical sample dataset
//!
//! The three partners and three users the dashboard ships with. Demos and
//! tests seed the registry from here; the reporting figures for this data
//! (total collected 270.00, recent order Carlos/Juan/Maria) are part of
//! the crate's test contract.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::model::{
    Attendance, ConstructionStatus, Partner, Payment, PaymentType, Property, User, UserRole,
};

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    // All fixture dates are valid midnight UTC timestamps.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

fn payment(
    date: DateTime<Utc>,
    payment_type: PaymentType,
    amount: f64,
    receipt_number: &str,
) -> Payment {
    Payment {
        id: Uuid::new_v4(),
        date,
        payment_type,
        amount,
        receipt_number: receipt_number.to_string(),
    }
}

fn attendance(date: DateTime<Utc>, attended: bool) -> Attendance {
    Attendance {
        id: Uuid::new_v4(),
        date,
        attended,
    }
}

/// The three sample partners, in registration order
pub fn sample_partners() -> Vec<Partner> {
    vec![
        Partner {
            id: 1,
            first_name: "Juan".to_string(),
            last_name: "Perez".to_string(),
            dni: "12345678".to_string(),
            phone: "987654321".to_string(),
            email: "juan.perez@example.com".to_string(),
            join_date: day(2022, 1, 15),
            property: Property::new("A", "12", ConstructionStatus::Finished),
            payments: vec![
                payment(day(2023, 10, 5), PaymentType::Water, 50.0, "R001"),
                payment(day(2023, 11, 5), PaymentType::Water, 50.0, "R002"),
                payment(day(2023, 11, 10), PaymentType::Contribution, 20.0, "R003"),
            ],
            attendance: vec![
                attendance(day(2023, 9, 20), true),
                attendance(day(2023, 10, 20), false),
                attendance(day(2023, 11, 20), true),
            ],
        },
        Partner {
            id: 2,
            first_name: "Maria".to_string(),
            last_name: "Gomez".to_string(),
            dni: "87654321".to_string(),
            phone: "912345678".to_string(),
            email: "maria.gomez@example.com".to_string(),
            join_date: day(2021, 7, 20),
            property: Property::new("B", "05", ConstructionStatus::InProgress),
            payments: vec![
                payment(day(2023, 10, 6), PaymentType::Water, 50.0, "R004"),
                payment(day(2023, 11, 6), PaymentType::Registration, 100.0, "R005"),
            ],
            attendance: vec![
                attendance(day(2023, 9, 20), true),
                attendance(day(2023, 10, 20), true),
                attendance(day(2023, 11, 20), true),
            ],
        },
        Partner {
            id: 3,
            first_name: "Carlos".to_string(),
            last_name: "Rodriguez".to_string(),
            dni: "11223344".to_string(),
            phone: "998877665".to_string(),
            email: "carlos.r@example.com".to_string(),
            join_date: day(2023, 2, 10),
            property: Property::new("A", "21", ConstructionStatus::Unbuilt),
            payments: vec![],
            attendance: vec![attendance(day(2023, 11, 20), false)],
        },
    ]
}

/// The board members who can open the dashboard
pub fn sample_users() -> Vec<User> {
    vec![
        User::new("Admin", UserRole::Admin),
        User::new("Tesorero", UserRole::Treasurer),
        User::new("Secretario", UserRole::Secretary),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_partners_shape() {
        let partners = sample_partners();

        assert_eq!(partners.len(), 3);
        assert_eq!(partners[0].payments.len(), 3);
        assert_eq!(partners[2].payments.len(), 0);

        let ids: Vec<u64> = partners.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_sample_users_roles() {
        let users = sample_users();
        let roles: Vec<UserRole> = users.iter().map(|u| u.role).collect();
        assert_eq!(
            roles,
            [UserRole::Admin, UserRole::Treasurer, UserRole::Secretary]
        );
    }
}
