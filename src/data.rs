// src/data.rs

use serde::Serialize;

use crate::models::{
    checklist::ChecklistItem,
    faq::{Faq, FaqCategory},
    guide::{Difficulty, DocumentType, GuideRecord},
    quiz::QuizQuestion,
};

/// An administrative region (state or territory).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

const REGIONS: &[Region] = &[
    Region { code: "AP", name: "Andhra Pradesh" },
    Region { code: "AR", name: "Arunachal Pradesh" },
    Region { code: "AS", name: "Assam" },
    Region { code: "BR", name: "Bihar" },
    Region { code: "CT", name: "Chhattisgarh" },
    Region { code: "DL", name: "Delhi" },
    Region { code: "GA", name: "Goa" },
    Region { code: "GJ", name: "Gujarat" },
    Region { code: "HR", name: "Haryana" },
    Region { code: "HP", name: "Himachal Pradesh" },
    Region { code: "JK", name: "Jammu and Kashmir" },
    Region { code: "JH", name: "Jharkhand" },
    Region { code: "KA", name: "Karnataka" },
    Region { code: "KL", name: "Kerala" },
    Region { code: "MP", name: "Madhya Pradesh" },
    Region { code: "MH", name: "Maharashtra" },
    Region { code: "MN", name: "Manipur" },
    Region { code: "ML", name: "Meghalaya" },
    Region { code: "MZ", name: "Mizoram" },
    Region { code: "NL", name: "Nagaland" },
    Region { code: "OR", name: "Odisha" },
    Region { code: "PB", name: "Punjab" },
    Region { code: "RJ", name: "Rajasthan" },
    Region { code: "SK", name: "Sikkim" },
    Region { code: "TN", name: "Tamil Nadu" },
    Region { code: "TG", name: "Telangana" },
    Region { code: "TR", name: "Tripura" },
    Region { code: "UP", name: "Uttar Pradesh" },
    Region { code: "UT", name: "Uttarakhand" },
    Region { code: "WB", name: "West Bengal" },
];

pub fn regions() -> Vec<Region> {
    REGIONS.to_vec()
}

/// Display name for a region code; `None` for codes outside the table.
pub fn region_name(code: &str) -> Option<&'static str> {
    REGIONS.iter().find(|region| region.code == code).map(|region| region.name)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Checklist template set the personalized list is derived from.
pub fn checklist_templates() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem {
            id: "aadhaar".to_string(),
            title: "Apply for Aadhaar Card".to_string(),
            description: "Your unique 12-digit identity number for all government services"
                .to_string(),
            document_type: DocumentType::Aadhaar,
            is_completed: false,
            estimated_time: "2-3 weeks".to_string(),
            difficulty: Difficulty::Easy,
        },
        ChecklistItem {
            id: "pan".to_string(),
            title: "Apply for PAN Card".to_string(),
            description: "Essential for filing taxes and financial transactions".to_string(),
            document_type: DocumentType::Pan,
            is_completed: false,
            estimated_time: "1-2 weeks".to_string(),
            difficulty: Difficulty::Easy,
        },
        ChecklistItem {
            id: "voter".to_string(),
            title: "Register as Voter".to_string(),
            description: "Get your Voter ID to participate in elections".to_string(),
            document_type: DocumentType::Voter,
            is_completed: false,
            estimated_time: "4-6 weeks".to_string(),
            difficulty: Difficulty::Medium,
        },
    ]
}

/// The fixed question bank.
pub fn quiz_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: "q1".to_string(),
            question: "Which document is mandatory for filing income tax returns?".to_string(),
            options: strings(&["Aadhaar Card", "PAN Card", "Voter ID", "Passport"]),
            correct_answer: 1,
            explanation: "PAN Card is mandatory for all tax-related transactions and filing returns."
                .to_string(),
        },
        QuizQuestion {
            id: "q2".to_string(),
            question: "At what age can you register as a voter in India?".to_string(),
            options: strings(&["16 years", "17 years", "18 years", "21 years"]),
            correct_answer: 2,
            explanation: "You can register as a voter when you turn 18 years old.".to_string(),
        },
        QuizQuestion {
            id: "q3".to_string(),
            question: "What is the full form of PAN?".to_string(),
            options: strings(&[
                "Personal Account Number",
                "Permanent Account Number",
                "Public Account Number",
                "Primary Account Number",
            ]),
            correct_answer: 1,
            explanation: "PAN stands for Permanent Account Number, issued by the Income Tax Department."
                .to_string(),
        },
    ]
}

pub fn faqs() -> Vec<Faq> {
    vec![
        Faq {
            id: "faq1".to_string(),
            question: "Do I need Aadhaar to vote?".to_string(),
            answer: "No, Aadhaar is not mandatory for voting. However, you can use it as identity \
                     proof when registering for voter ID."
                .to_string(),
            category: FaqCategory::Voting,
            related_documents: vec![DocumentType::Aadhaar, DocumentType::Voter],
        },
        Faq {
            id: "faq2".to_string(),
            question: "Can I apply for PAN online?".to_string(),
            answer: "Yes, you can apply for PAN online through the official NSDL or UTIITSL \
                     websites. You'll need to upload documents and pay the fee online."
                .to_string(),
            category: FaqCategory::Pan,
            related_documents: vec![DocumentType::Pan],
        },
        Faq {
            id: "faq3".to_string(),
            question: "What documents do I need for Aadhaar?".to_string(),
            answer: "You need proof of identity (school certificate, passport, etc.) and proof of \
                     address (utility bill, rent agreement, etc.)."
                .to_string(),
            category: FaqCategory::Aadhaar,
            related_documents: vec![DocumentType::Aadhaar],
        },
    ]
}

/// Static application guide for a document type. Passport and driving licence
/// have checklist coverage planned but no guide yet, so they are `None` like
/// any unknown key.
pub fn guide_for(document_type: DocumentType) -> Option<GuideRecord> {
    match document_type {
        DocumentType::Aadhaar => Some(GuideRecord {
            document_type,
            title: "Aadhaar Card Application Guide".to_string(),
            description: "Your unique 12-digit identity number for all government services"
                .to_string(),
            importance: strings(&[
                "Required for bank account opening",
                "Mandatory for government welfare schemes",
                "Needed for mobile connection",
                "Required for PAN card application",
            ]),
            requirements: strings(&[
                "Proof of Identity (Birth Certificate, School Leaving Certificate, Passport)",
                "Proof of Address (Utility Bill, Rent Agreement, Bank Statement)",
                "Date of Birth proof",
                "One passport-size photograph",
            ]),
            steps: strings(&[
                "Visit the nearest Aadhaar enrollment center",
                "Fill the enrollment form with accurate details",
                "Submit required documents",
                "Provide biometric data (fingerprints and iris scan)",
                "Get acknowledgment slip with enrollment number",
                "Wait for 60-90 days for Aadhaar generation",
                "Download e-Aadhaar from UIDAI website or collect physical copy",
            ]),
            official_link: "https://uidai.gov.in/".parse().unwrap(),
            estimated_time: "2-3 weeks".to_string(),
            difficulty: Difficulty::Easy,
        }),
        DocumentType::Pan => Some(GuideRecord {
            document_type,
            title: "PAN Card Application Guide".to_string(),
            description: "Permanent Account Number essential for all financial transactions"
                .to_string(),
            importance: strings(&[
                "Mandatory for filing income tax returns",
                "Required for opening bank accounts",
                "Needed for high-value purchases",
                "Essential for mutual fund investments",
            ]),
            requirements: strings(&[
                "Proof of Identity (Aadhaar, Passport, Voter ID)",
                "Proof of Address (Utility Bill, Bank Statement)",
                "Proof of Date of Birth (Birth Certificate, School Certificate)",
                "Passport-size photograph",
                "PAN application form (Form 49A for individuals)",
            ]),
            steps: strings(&[
                "Visit NSDL or UTIITSL website for online application",
                "Fill Form 49A with accurate personal details",
                "Upload required documents in specified format",
                "Pay application fee (₹107 for online, ₹107 for physical card)",
                "Choose delivery option (digital/physical)",
                "Submit application and note acknowledgment number",
                "Track application status online",
                "Receive PAN card within 15-20 working days",
            ]),
            official_link: "https://www.onlineservices.nsdl.com/paam/endUserRegisterContact.html"
                .parse()
                .unwrap(),
            estimated_time: "1-2 weeks".to_string(),
            difficulty: Difficulty::Easy,
        }),
        DocumentType::Voter => Some(GuideRecord {
            document_type,
            title: "Voter ID Registration Guide".to_string(),
            description: "Electoral Photo Identity Card to participate in Indian democracy"
                .to_string(),
            importance: strings(&[
                "Constitutional right to vote in elections",
                "Valid identity proof for various purposes",
                "Enables participation in democratic process",
                "Required for contesting elections",
            ]),
            requirements: strings(&[
                "Age: Minimum 18 years on qualifying date",
                "Proof of Age (Birth Certificate, School Certificate)",
                "Proof of Address (Utility Bill, Aadhaar, Rent Agreement)",
                "Passport-size photographs",
                "Form 6 (for new registration)",
            ]),
            steps: strings(&[
                "Visit National Voters' Service Portal (NVSP)",
                "Register new account or login",
                "Fill Form 6 for new voter registration",
                "Upload required documents and photograph",
                "Choose constituency based on your address",
                "Submit application online",
                "Wait for field verification by election officer",
                "Receive Voter ID card within 4-6 weeks after verification",
            ]),
            official_link: "https://www.nvsp.in/".parse().unwrap(),
            estimated_time: "4-6 weeks".to_string(),
            difficulty: Difficulty::Medium,
        }),
        DocumentType::Passport | DocumentType::Driving => None,
    }
}
