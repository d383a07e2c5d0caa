//! Fixed seed dataset.
//!
//! Used whenever a durable snapshot is absent or fails to parse, so a fresh
//! (or corrupted) installation always starts from a populated marketplace.
//! Ids are deterministic so tests and seeded cross-references stay stable.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{
    Conversation, Developer, Job, Message, Notification, PortfolioItem, Proposal, Transaction,
};
use crate::types::{
    Counterparty, Gender, JobType, KycStatus, NotificationKind, NotificationTarget,
    ProposalStatus, TxStatus, TxType,
};

pub const DEV_AMARA: Uuid = Uuid::from_u128(0xA1);
pub const DEV_NOAH: Uuid = Uuid::from_u128(0xA2);
pub const DEV_LISE: Uuid = Uuid::from_u128(0xA3);

pub const CLIENT_ATLAS: Uuid = Uuid::from_u128(0xB1);
pub const CLIENT_HARBOR: Uuid = Uuid::from_u128(0xB2);

pub const JOB_STOREFRONT: Uuid = Uuid::from_u128(0xC1);
pub const JOB_INVENTORY: Uuid = Uuid::from_u128(0xC2);
pub const JOB_REDESIGN: Uuid = Uuid::from_u128(0xC3);

fn seed_time() -> DateTime<Utc> {
    // Fixed reference instant for seeded records.
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).single().unwrap_or_default()
}

/// Seeded developer directory.
pub fn directory() -> Vec<Developer> {
    vec![
        Developer {
            id: DEV_AMARA,
            name: "Amara Diallo".into(),
            email: "amara@example.com".into(),
            phone: "074000001".into(),
            gender: Some(Gender::F),
            title: "Senior fullstack developer".into(),
            location: "Libreville".into(),
            skills: vec![
                "React".into(),
                "Node.js".into(),
                "PostgreSQL".into(),
                "TypeScript".into(),
            ],
            hourly_rate: 15_000,
            bio: "Helps local businesses go digital. Payment-API integrations a specialty."
                .into(),
            avatar_url: Some("https://avatars.example.com/amara".into()),
            available: true,
            experience_years: 5,
            completed_projects: 42,
            rating: 4.9,
            review_count: 28,
            premium: true,
            verified: true,
            kyc_status: KycStatus::Verified,
            wallet_balance: 150_000,
            blocked: false,
            portfolio: vec![PortfolioItem {
                id: Uuid::from_u128(0xD1),
                title: "Local marketplace".into(),
                url: "https://example.com/marketplace".into(),
                description: Some("Storefront with mobile-money checkout".into()),
            }],
            identity: None,
        },
        Developer {
            id: DEV_NOAH,
            name: "Noah Mensah".into(),
            email: "noah@example.com".into(),
            phone: "062000002".into(),
            gender: Some(Gender::M),
            title: "UI/UX designer & frontend".into(),
            location: "Port-Gentil".into(),
            skills: vec!["Figma".into(), "Vue.js".into(), "Tailwind CSS".into()],
            hourly_rate: 12_000,
            bio: "Designs clean, intuitive interfaces for web and mobile.".into(),
            avatar_url: Some("https://avatars.example.com/noah".into()),
            available: true,
            experience_years: 3,
            completed_projects: 15,
            rating: 4.7,
            review_count: 12,
            premium: false,
            verified: true,
            kyc_status: KycStatus::Unverified,
            wallet_balance: 0,
            blocked: false,
            portfolio: Vec::new(),
            identity: None,
        },
        Developer {
            id: DEV_LISE,
            name: "Lise Okome".into(),
            email: "lise@example.com".into(),
            phone: "077000003".into(),
            gender: Some(Gender::F),
            title: "Mobile developer".into(),
            location: "Franceville".into(),
            skills: vec!["Flutter".into(), "Dart".into(), "Firebase".into()],
            hourly_rate: 18_000,
            bio: "Cross-platform mobile apps, from prototype to store release.".into(),
            avatar_url: Some("https://avatars.example.com/lise".into()),
            available: false,
            experience_years: 4,
            completed_projects: 20,
            rating: 4.8,
            review_count: 19,
            premium: true,
            verified: true,
            kyc_status: KycStatus::Pending,
            wallet_balance: 50_000,
            blocked: false,
            portfolio: Vec::new(),
            identity: None,
        },
    ]
}

/// Seeded job board, most recent first.
pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: JOB_STOREFRONT,
            title: "E-commerce storefront for a fashion brand".into(),
            company: "Atlas Mode".into(),
            location: "Libreville".into(),
            job_type: JobType::Freelance,
            description: "Build an online shop with mobile-money checkout for a local \
                          clothing brand."
                .into(),
            posted: "2 days ago".into(),
            deadline: Some("in 15 days".into()),
            skills: vec!["WordPress".into(), "WooCommerce".into(), "Payment API".into()],
            budget_min: Some(500_000),
            budget_max: Some(1_000_000),
            author_id: Some(CLIENT_ATLAS),
        },
        Job {
            id: JOB_INVENTORY,
            title: "Inventory management web app".into(),
            company: "Harbor Logistics".into(),
            location: "Port-Gentil".into(),
            job_type: JobType::Freelance,
            description: "Warehouse stock in/out tracking. Must keep working offline (PWA)."
                .into(),
            posted: "4 hours ago".into(),
            deadline: Some("urgent".into()),
            skills: vec!["React".into(), "Node.js".into(), "PWA".into()],
            budget_min: Some(800_000),
            budget_max: Some(1_500_000),
            author_id: Some(CLIENT_HARBOR),
        },
        Job {
            id: JOB_REDESIGN,
            title: "Corporate site redesign".into(),
            company: "Meridian Construction".into(),
            location: "Franceville".into(),
            job_type: JobType::Freelance,
            description: "Modernize an institutional website. Responsive and fast.".into(),
            posted: "1 day ago".into(),
            deadline: None,
            skills: vec!["HTML/CSS".into(), "JavaScript".into(), "SEO".into()],
            budget_min: Some(200_000),
            budget_max: Some(400_000),
            author_id: None,
        },
    ]
}

pub fn proposals() -> Vec<Proposal> {
    vec![Proposal {
        id: Uuid::from_u128(0xE1),
        job_id: JOB_STOREFRONT,
        developer_id: DEV_AMARA,
        developer_name: "Amara Diallo".into(),
        message: "Hello, I have shipped several WooCommerce shops with mobile-money \
                  checkout and can start this week."
            .into(),
        price: 600_000,
        posted: "1 day ago".into(),
        status: ProposalStatus::Pending,
    }]
}

pub fn notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: Uuid::from_u128(0xF1),
            target: NotificationTarget::User(DEV_AMARA),
            kind: NotificationKind::Success,
            message: "Your profile has been verified.".into(),
            read: false,
            created_at: seed_time(),
        },
        Notification {
            id: Uuid::from_u128(0xF2),
            target: NotificationTarget::User(DEV_AMARA),
            kind: NotificationKind::Info,
            message: "A new job matching your skills was posted.".into(),
            read: false,
            created_at: seed_time(),
        },
    ]
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        Conversation {
            id: Uuid::from_u128(0x101),
            participant_id: CLIENT_ATLAS,
            participant_name: "Atlas Mode".into(),
            participant_avatar: None,
            last_message: "When can you start?".into(),
            unread_count: 1,
        },
        Conversation {
            id: Uuid::from_u128(0x102),
            participant_id: CLIENT_HARBOR,
            participant_name: "Harbor Logistics".into(),
            participant_avatar: None,
            last_message: "Thanks for the quote.".into(),
            unread_count: 0,
        },
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: Uuid::from_u128(0x111),
            sender_id: Some(CLIENT_ATLAS),
            receiver_id: Some(DEV_AMARA),
            content: "Hi Amara, I saw your profile.".into(),
            sent_at: seed_time(),
        },
        Message {
            id: Uuid::from_u128(0x112),
            sender_id: Some(DEV_AMARA),
            receiver_id: Some(CLIENT_ATLAS),
            content: "Hello! How can I help?".into(),
            sent_at: seed_time(),
        },
        Message {
            id: Uuid::from_u128(0x113),
            sender_id: Some(CLIENT_ATLAS),
            receiver_id: Some(DEV_AMARA),
            content: "When can you start?".into(),
            sent_at: seed_time(),
        },
    ]
}

/// Seeded ledger, oldest first.
pub fn ledger() -> Vec<Transaction> {
    vec![
        Transaction {
            id: Uuid::from_u128(0x121),
            tx_type: TxType::Payment,
            amount: 600_000,
            from: Counterparty::User(CLIENT_ATLAS),
            to: Counterparty::User(DEV_AMARA),
            created_at: seed_time(),
            status: TxStatus::Completed,
            description: "Payment, storefront project".into(),
        },
        Transaction {
            id: Uuid::from_u128(0x122),
            tx_type: TxType::Fee,
            amount: 48_000,
            from: Counterparty::User(DEV_AMARA),
            to: Counterparty::System,
            created_at: seed_time(),
            status: TxStatus::Completed,
            description: "Platform commission (8%)".into(),
        },
        Transaction {
            id: Uuid::from_u128(0x123),
            tx_type: TxType::Withdrawal,
            amount: 100_000,
            from: Counterparty::User(DEV_AMARA),
            to: Counterparty::External,
            created_at: seed_time(),
            status: TxStatus::Completed,
            description: "Mobile-money withdrawal".into(),
        },
        Transaction {
            id: Uuid::from_u128(0x124),
            tx_type: TxType::Payment,
            amount: 150_000,
            from: Counterparty::User(CLIENT_HARBOR),
            to: Counterparty::User(DEV_LISE),
            created_at: seed_time(),
            status: TxStatus::Completed,
            description: "Deposit, mobile app".into(),
        },
    ]
}
