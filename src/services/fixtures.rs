//! Fixtures
//!
//! Seed records for the in-memory repositories.

use std::collections::BTreeMap;

use crate::domain::{Asset, Backup, Company, Document, Location, MaintenanceType, Project, Promotion, Transfer};

fn opt(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

pub fn assets() -> Vec<Asset> {
    [
        ("AST-001", "Toyota Hilux", "Vehicle", "Abuja HQ", "active", "2021-04-12", 18_500_000.0),
        ("AST-002", "Dell Latitude 5420", "IT Equipment", "Lagos Branch", "active", "2022-01-20", 650_000.0),
        ("AST-003", "Mikano 60KVA Generator", "Equipment", "Abuja HQ", "in_maintenance", "2019-08-03", 9_750_000.0),
        ("AST-004", "Conference Table", "Furniture", "Kano Office", "active", "2020-02-14", 420_000.0),
        ("AST-005", "HP LaserJet Pro", "IT Equipment", "Abuja HQ", "retired", "2016-11-30", 180_000.0),
        ("AST-006", "Nissan Urvan", "Vehicle", "Port Harcourt Office", "in_maintenance", "2018-06-18", 14_200_000.0),
        ("AST-007", "Split Air Conditioner", "Equipment", "Lagos Branch", "active", "2023-03-09", 385_000.0),
        ("AST-008", "Cisco Catalyst Switch", "IT Equipment", "Abuja HQ", "active", "2022-09-27", 1_150_000.0),
        ("AST-009", "Filing Cabinet", "Furniture", "Enugu Office", "active", "", 95_000.0),
        ("AST-010", "Toyota Corolla", "Vehicle", "Kano Office", "retired", "2014-05-22", 4_300_000.0),
        ("AST-011", "Projector Epson EB", "IT Equipment", "Ibadan Office", "active", "2023-10-02", 540_000.0),
        ("AST-012", "Executive Chair", "Furniture", "Abuja HQ", "active", "2021-12-01", 210_000.0),
    ]
    .into_iter()
    .zip(1..)
    .map(|((tag, name, category, location, status, purchased, value), id)| Asset {
        id,
        asset_tag: tag.into(),
        name: name.into(),
        category: category.into(),
        location: location.into(),
        status: status.into(),
        purchase_date: opt(purchased),
        value,
    })
    .collect()
}

pub fn maintenance_types() -> Vec<MaintenanceType> {
    [
        ("Oil Change", "Engine oil and filter replacement", 90, true),
        ("Tyre Rotation", "Rotate and balance vehicle tyres", 180, true),
        ("Generator Servicing", "Full service of standby generators", 120, true),
        ("AC Servicing", "Clean filters and recharge gas", 90, true),
        ("Fire Extinguisher Check", "Pressure and seal inspection", 365, true),
        ("Network Audit", "Switch and router firmware review", 180, false),
        ("Roof Inspection", "Leak and structural inspection", 365, true),
        ("Elevator Maintenance", "Statutory lift inspection", 30, true),
        ("Plumbing Check", "Pipes, tanks and pumps", 120, false),
        ("UPS Battery Test", "Load test backup batteries", 60, true),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, description, interval_days, active), id)| MaintenanceType {
        id,
        name: name.into(),
        description: description.into(),
        interval_days,
        active,
    })
    .collect()
}

pub fn promotions() -> Vec<Promotion> {
    [
        ("Adaeze Okafor", "IPP-104233", 8, 9, "2024-01-01", "approved"),
        ("Musa Bello", "IPP-100871", 10, 12, "2024-01-01", "approved"),
        ("Funke Adeyemi", "IPP-109412", 7, 8, "2024-04-01", "pending"),
        ("Chinedu Nwosu", "IPP-102954", 12, 13, "2024-04-01", "rejected"),
        ("Halima Sani", "IPP-107720", 9, 10, "2024-07-01", "pending"),
        ("Tunde Bakare", "IPP-101368", 6, 7, "2024-07-01", "approved"),
        ("Ngozi Eze", "IPP-108845", 13, 14, "2024-10-01", "pending"),
        ("Ibrahim Lawal", "IPP-103390", 8, 9, "2024-10-01", "approved"),
        ("Blessing Udo", "IPP-105517", 5, 6, "2025-01-01", "pending"),
        ("Yusuf Danjuma", "IPP-106682", 14, 15, "2025-01-01", "rejected"),
        ("Kemi Alabi", "IPP-109903", 10, 11, "2025-04-01", "pending"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, ippis, from, to, effective, status), id)| Promotion {
        id,
        employee_name: name.into(),
        ippis_number: ippis.into(),
        from_grade: from,
        to_grade: to,
        effective_date: effective.into(),
        status: status.into(),
    })
    .collect()
}

pub fn transfers() -> Vec<Transfer> {
    [
        ("Emeka Obi", "IPP-102201", "Lagos Branch", "Abuja HQ", "2024-02-05", "Departmental restructuring", "completed"),
        ("Aisha Mohammed", "IPP-104410", "Kano Office", "Kaduna Office", "2024-03-11", "Spouse relocation", "approved"),
        ("Segun Ogunleye", "IPP-108023", "Abuja HQ", "Ibadan Office", "2024-04-22", "", "pending"),
        ("Grace Etim", "IPP-101776", "Port Harcourt Office", "Calabar Office", "2024-05-13", "Staff balancing", "completed"),
        ("Bala Usman", "IPP-109158", "Abuja HQ", "Sokoto Office", "2024-06-03", "", "rejected"),
        ("Chioma Agu", "IPP-103642", "Enugu Office", "Lagos Branch", "2024-06-24", "Career development", "pending"),
        ("Danladi Garba", "IPP-107305", "Jos Office", "Abuja HQ", "2024-08-19", "Promotion posting", "approved"),
        ("Folake Ojo", "IPP-105029", "Ibadan Office", "Akure Office", "2024-09-09", "", "pending"),
        ("Nnamdi Okeke", "IPP-106488", "Lagos Branch", "Port Harcourt Office", "2024-10-14", "Project assignment", "completed"),
        ("Zainab Aliyu", "IPP-100932", "Kaduna Office", "Kano Office", "2024-11-04", "Medical grounds", "pending"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, ippis, from, to, date, reason, status), id)| Transfer {
        id,
        employee_name: name.into(),
        ippis_number: ippis.into(),
        from_location: from.into(),
        to_location: to.into(),
        transfer_date: date.into(),
        reason: opt(reason),
        status: status.into(),
    })
    .collect()
}

pub fn projects() -> Vec<Project> {
    [
        ("PRJ-001", "Payroll Data Cleanup", "Sigma Systems Ltd", 45_000_000.0, "2023-02-01", "2023-11-30", "completed"),
        ("PRJ-002", "Biometric Enrolment Phase II", "Verifid Nigeria", 120_000_000.0, "2023-07-15", "", "active"),
        ("PRJ-003", "HQ Network Upgrade", "Netcore Solutions", 38_500_000.0, "2024-01-10", "2024-06-30", "completed"),
        ("PRJ-004", "Pension Integration", "Sigma Systems Ltd", 76_000_000.0, "2024-03-01", "", "active"),
        ("PRJ-005", "Records Digitization", "Archway Docs", 22_000_000.0, "2024-05-20", "", "on_hold"),
        ("PRJ-006", "Staff Portal Revamp", "Pixel Forge", 31_250_000.0, "2024-09-01", "2025-03-31", "active"),
        ("PRJ-007", "Data Centre Cooling", "Coolair Engineering", 15_800_000.0, "2025-01-06", "", "planned"),
        ("PRJ-008", "Audit Trail Module", "Netcore Solutions", 9_400_000.0, "2025-02-17", "", "planned"),
        ("PRJ-009", "Nominal Roll Verification", "Verifid Nigeria", 64_000_000.0, "2022-10-03", "2023-05-31", "completed"),
        ("PRJ-010", "Disaster Recovery Site", "Sigma Systems Ltd", 150_000_000.0, "2024-11-11", "", "active"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((code, name, company, budget, start, end, status), id)| Project {
        id,
        code: code.into(),
        name: name.into(),
        company: company.into(),
        budget,
        start_date: start.into(),
        end_date: opt(end),
        status: status.into(),
    })
    .collect()
}

pub fn companies() -> Vec<Company> {
    [
        ("Sigma Systems Ltd", "RC-104552", "info@sigmasystems.ng", "+234 803 555 0101", "12 Adeola Odeku St, Lagos", true),
        ("Verifid Nigeria", "RC-230918", "contact@verifid.ng", "+234 809 555 0143", "5 Aguiyi Ironsi St, Abuja", true),
        ("Netcore Solutions", "RC-318847", "sales@netcore.com.ng", "", "44 Allen Avenue, Ikeja", true),
        ("Archway Docs", "RC-402213", "hello@archwaydocs.ng", "+234 812 555 0177", "", false),
        ("Pixel Forge", "RC-511096", "studio@pixelforge.ng", "+234 701 555 0190", "3 Bode Thomas St, Surulere", true),
        ("Coolair Engineering", "RC-287731", "service@coolair.ng", "+234 805 555 0122", "Plot 9 Trans-Amadi, Port Harcourt", true),
        ("Baobab Logistics", "RC-194470", "ops@baobab.ng", "", "Km 4 Kano-Zaria Rd, Kano", false),
        ("Greenfield Facilities", "RC-366025", "fm@greenfield.ng", "+234 816 555 0155", "17 Ogui Rd, Enugu", true),
        ("Ironclad Security", "RC-450381", "desk@ironclad.ng", "+234 802 555 0168", "", true),
        ("Meridian Consulting", "RC-129904", "partners@meridian.ng", "+234 806 555 0139", "8 Oyo Rd, Ibadan", true),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, rc, email, phone, address, active), id)| Company {
        id,
        name: name.into(),
        registration_number: rc.into(),
        email: email.into(),
        phone: opt(phone),
        address: opt(address),
        active,
    })
    .collect()
}

pub fn locations() -> Vec<Location> {
    [
        ("ABJ-HQ", "Abuja HQ", "FCT", "Plot 1 Central Business District", "headquarters"),
        ("LOS-01", "Lagos Branch", "Lagos", "21 Broad St, Lagos Island", "branch"),
        ("KAN-01", "Kano Office", "Kano", "Bompai Rd", "branch"),
        ("PHC-01", "Port Harcourt Office", "Rivers", "Aba Rd", "branch"),
        ("ENU-01", "Enugu Office", "Enugu", "", "branch"),
        ("IBD-01", "Ibadan Office", "Oyo", "Ring Rd", "branch"),
        ("KAD-01", "Kaduna Office", "Kaduna", "", "field_office"),
        ("JOS-01", "Jos Office", "Plateau", "Ahmadu Bello Way", "field_office"),
        ("CAL-01", "Calabar Office", "Cross River", "", "field_office"),
        ("SOK-01", "Sokoto Office", "Sokoto", "", "field_office"),
        ("AKR-01", "Akure Office", "Ondo", "Oba Adesida Rd", "field_office"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((code, name, state, address, location_type), id)| Location {
        id,
        code: code.into(),
        name: name.into(),
        state: state.into(),
        address: opt(address),
        location_type: location_type.into(),
    })
    .collect()
}

pub fn documents() -> Vec<Document> {
    [
        ("Staff Handbook 2024", "policy", "HR", "2024-01-08T09:12:00", 2_480.0, &[("version", "3.1")][..]),
        ("Promotion Exam Results", "report", "Establishment", "2024-02-19T14:30:00", 640.0, &[("batch", "Q1")][..]),
        ("Posting Letter - E. Obi", "letter", "HR", "2024-02-05T10:00:00", 96.0, &[("ippis", "IPP-102201")][..]),
        ("Asset Register Q1", "report", "Admin", "2024-04-02T08:45:00", 1_210.0, &[][..]),
        ("Procurement Guidelines", "policy", "Procurement", "2023-11-20T16:05:00", 3_150.0, &[("version", "1.4"), ("approved_by", "PS")][..]),
        ("Vendor Contract - Sigma", "contract", "Legal", "2024-03-01T11:20:00", 870.0, &[("company", "Sigma Systems Ltd")][..]),
        ("Leave Roster 2024", "schedule", "HR", "2024-01-15T13:00:00", 210.0, &[][..]),
        ("Audit Report FY2023", "report", "Audit", "2024-05-30T15:40:00", 4_020.0, &[("fiscal_year", "2023")][..]),
        ("Fleet Insurance Certificate", "certificate", "Transport", "2024-06-11T09:00:00", 355.0, &[("expires", "2025-06-10")][..]),
        ("Training Calendar", "schedule", "Training", "2024-07-01T08:00:00", 180.0, &[][..]),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, category, owner, uploaded_at, size_kb, meta), seq)| Document {
        id: format!("DOC-{seq:04}"),
        title: title.into(),
        category: category.into(),
        owner: owner.into(),
        uploaded_at: uploaded_at.into(),
        size_kb,
        metadata: meta
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>(),
    })
    .collect()
}

pub fn backups() -> Vec<Backup> {
    [
        ("Nightly full", "full", "2024-11-01T01:00:00", 5_120.0, "completed"),
        ("Hourly incremental", "incremental", "2024-11-01T09:00:00", 214.0, "completed"),
        ("Hourly incremental", "incremental", "2024-11-01T10:00:00", 198.0, "failed"),
        ("Nightly full", "full", "2024-11-02T01:00:00", 5_168.0, "completed"),
        ("Pre-upgrade snapshot", "full", "2024-11-03T18:30:00", 5_190.0, "completed"),
        ("Hourly incremental", "incremental", "2024-11-04T11:00:00", 231.0, "completed"),
        ("Nightly full", "full", "2024-11-05T01:00:00", 5_204.0, "failed"),
        ("Month end", "full", "2024-11-30T23:00:00", 5_317.0, "completed"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, backup_type, created_at, size_mb, status), seq)| Backup {
        id: format!("BKP-{seq:04}"),
        name: name.into(),
        backup_type: backup_type.into(),
        created_at: created_at.into(),
        size_mb,
        status: status.into(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Entity, EntityForm, Row};
    use std::collections::HashSet;

    fn unique_ids<E: Entity>(records: &[E]) -> bool {
        let ids: HashSet<_> = records.iter().map(Row::id).collect();
        ids.len() == records.len()
    }

    #[test]
    fn fixtures_have_unique_ids() {
        assert!(unique_ids(&assets()));
        assert!(unique_ids(&maintenance_types()));
        assert!(unique_ids(&promotions()));
        assert!(unique_ids(&transfers()));
        assert!(unique_ids(&projects()));
        assert!(unique_ids(&companies()));
        assert!(unique_ids(&locations()));
        assert!(unique_ids(&documents()));
        assert!(unique_ids(&backups()));
    }

    #[test]
    fn fixtures_round_trip_through_forms() {
        for asset in assets() {
            let parsed = crate::domain::Asset::from_form(Some(asset.id()), &asset.to_form()).expect("valid fixture");
            assert_eq!(parsed, asset);
        }
    }
}
