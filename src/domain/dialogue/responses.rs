//! Canned response texts.
//!
//! Every (topic, sub-topic) pair carries several pre-authored,
//! interchangeable variants; the rotation tracker cycles through them so
//! a repeated question is never answered with the same phrasing twice in
//! a row. Each topic also has a fixed introductory overview (served on
//! top-level detection) and a fixed in-topic default (served when no
//! sub-topic matches). All texts are static data; nothing here is
//! computed.

use super::topic::{SubTopic, Topic};

/// Acknowledgement for a return-to-menu utterance.
pub const RETURN_TO_MENU: &str = "Returning to main menu. How else can I help you?";

/// Acknowledgement for a gratitude utterance; the topic is preserved.
pub const GRATITUDE: &str = "You're welcome! 😊 Is there anything else I can help you with?";

/// Generic prompt served when nothing matched anywhere.
pub const FALLBACK: &str =
    "I'm here to help with university services. Please choose an option below:";

/// Greeting shown when a brand-new conversation opens.
pub const WELCOME: &str = "Hello! 👋 I'm the Student Assistant. How can I help you today? \
You can ask about fees, hostels, exam cards, transcripts, or other university services.";

/// Prompt shown when persisted history exists at open.
pub const CONTINUE_PROMPT: &str =
    "Welcome back! Would you like to continue your previous conversation or start a new one?";

/// Confirmation shown after the history is deleted.
pub const HISTORY_CLEARED: &str =
    "Conversation history has been cleared. Starting a fresh session.";

/// Returns the rotating answer variants for a sub-topic.
///
/// Invariant: every slice is non-empty and all variants within it are
/// interchangeable answers to the same question.
pub fn variants(sub_topic: SubTopic) -> &'static [&'static str] {
    match sub_topic {
        SubTopic::Payment => FEES_PAYMENT,
        SubTopic::Deadlines => FEES_DEADLINES,
        SubTopic::Balance => FEES_BALANCE,
        SubTopic::Sponsorship => FEES_SPONSORSHIP,
        SubTopic::Registrar => ADMIN_REGISTRAR,
        SubTopic::Dean => ADMIN_DEAN,
        SubTopic::Exams => ADMIN_EXAMS,
        SubTopic::Finance => ADMIN_FINANCE,
        SubTopic::Application => HOSTELS_APPLICATION,
        SubTopic::HostelFees => HOSTELS_FEES,
        SubTopic::Rules => HOSTELS_RULES,
        SubTopic::HostelFacilities => HOSTELS_FACILITIES,
        SubTopic::Access => RESULTS_ACCESS,
        SubTopic::Transcripts => RESULTS_TRANSCRIPTS,
        SubTopic::Remarking => RESULTS_REMARKING,
        SubTopic::Supplementary => RESULTS_SUPPLEMENTARY,
        SubTopic::Library => GENERAL_LIBRARY,
        SubTopic::Contacts => GENERAL_CONTACTS,
        SubTopic::Events => GENERAL_EVENTS,
        SubTopic::CampusFacilities => GENERAL_FACILITIES,
    }
}

/// Returns the introductory overview served when a topic is detected
/// from the neutral state.
pub fn topic_overview(topic: Topic) -> &'static str {
    match topic {
        Topic::Fees => FEES_OVERVIEW,
        Topic::Administration => ADMIN_OVERVIEW,
        Topic::Hostels => HOSTELS_OVERVIEW,
        Topic::Results => RESULTS_OVERVIEW,
        Topic::General => GENERAL_OVERVIEW,
    }
}

/// Returns the in-topic default served when no sub-topic matched.
pub fn topic_default(topic: Topic) -> &'static str {
    match topic {
        Topic::Fees => FEES_DEFAULT,
        Topic::Administration => ADMIN_DEFAULT,
        Topic::Hostels => HOSTELS_DEFAULT,
        Topic::Results => RESULTS_DEFAULT,
        Topic::General => GENERAL_DEFAULT,
    }
}

// ============================================================================
// Topic overviews (top-level detection) and in-topic defaults
// ============================================================================

const FEES_OVERVIEW: &str = "📊 Fees & Financial Services:\n\n\
• Tuition Fees: Program-specific (View at finance.mku.ac.ke)\n\
• Payment Options: MPesa, Bank, Online Portal\n\
• Sponsorships: HELB, County, Corporate\n\
• Contacts: finance@mku.ac.ke / 020-2874000\n\n\
What specific fee information do you need?";

const FEES_DEFAULT: &str = "📊 Comprehensive Fees Information:\n\n\
• Fee Structure: Varies by program (View at finance.mku.ac.ke/fee-structure)\n\
• Payment Options: MPesa, Bank, Online, Finance Office\n\
• Important Contacts:\n  - Finance Office: finance@mku.ac.ke / 020-2874000\n  - HELB Desk: helb@mku.ac.ke\n\n\
What specific fee service do you need?";

const ADMIN_OVERVIEW: &str = "🏛️ Administrative Services:\n\n\
• Registrar: Transcripts, certificates\n\
• Dean of Students: Welfare, counseling\n\
• Finance Office: Fee management\n\
• Exams Office: Results, exam cards\n\n\
Which administrative department do you need?";

const ADMIN_DEFAULT: &str = "🏛️ Administration Services Overview:\n\n\
1. Registrar's Office: Transcripts, certificates, registration\n\
2. Dean of Students: Counseling, clubs, disability services\n\
3. Finance Office: Fees, receipts, sponsorships\n\
4. Examination Office: Exam cards, special exams\n\n\
Which specific service do you require?";

const HOSTELS_OVERVIEW: &str = "🏠 Hostel Accommodation Services:\n\n\
• Application Process: Online portal\n\
• Fee Structure: Standard/Premium options\n\
• Regulations: Visiting hours, curfew\n\
• Facilities: WiFi, laundry, security\n\n\
What hostel information do you need?";

const HOSTELS_DEFAULT: &str = "🏠 Comprehensive Hostel Information:\n\n\
• Application Portal: accommodation.mku.ac.ke\n\
• Contact: hostels@mku.ac.ke / 0712345678\n\
• Locations:\n  - Main Campus: 5 hostels\n  - Town Campus: 2 hostels\n  - Parklands: 1 hostel\n\n\
What hostel service do you require?";

const RESULTS_OVERVIEW: &str = "📝 Academic Results Services:\n\n\
• Accessing Results: Portal/SMS\n\
• Transcript Requests: Standard/Express\n\
• Remarking: Process and fees\n\
• Supp Exams: Registration procedure\n\n\
What result service do you require?";

const RESULTS_DEFAULT: &str = "📝 Comprehensive Results Services:\n\n\
• Transcript Requests: Online/Offline\n\
• Result Inquiries: Exam Office Rm 15\n\
• Verification Portal: verify.mku.ac.ke\n\
• Contact: exams@mku.ac.ke / 020-2874123\n\n\
What result service do you need?";

const GENERAL_OVERVIEW: &str = "ℹ️ General University Services:\n\n\
• Library: Resources and hours\n\
• Contacts: Essential numbers\n\
• Events: Calendar and registration\n\
• Facilities: Labs, sports, health\n\n\
Which general service do you need information about?";

const GENERAL_DEFAULT: &str = "ℹ️ General University Information:\n\n\
• Academic Calendar: calendar.mku.ac.ke\n\
• Student Portal: studentportal.mku.ac.ke\n\
• Mobile App: MKU Connect (Play Store/App Store)\n\
• Important Numbers: 020-2874000\n\n\
Which general service do you need information about?";

// ============================================================================
// Fees
// ============================================================================

const FEES_PAYMENT: &[&str] = &[
    "💳 Payment Methods Details:\n\n\
• MPesa: Paybill 404040, Account: Student Registration Number\n  - Transaction limit: Ksh 150,000 per day\n  - Processing time: Instant (portal updates within 2hrs)\n\
• Bank Deposit: \n  - Equity Bank: Acc No. 0780263456007\n  - KCB: Acc No. 1145889300\n  - Use registration number as reference\n\
• Online Portal: \n  - Visa/Mastercard (2.9% processing fee)\n  - Mobile Banking: Select 'MKU Fees' option\n\n\
ℹ️ Always get receipt confirmation SMS within 24hrs",
    "📱 Digital Payment Options:\n\n\
• MPesa: \n  - Paybill: 404040\n  - Account: Student registration number\n  - Daily limit: Ksh 150,000\n\
• Bank Transfer: \n  - Equity: 0780263456007\n  - KCB: 1145889300\n  - Reference: Registration number\n\
• Card Payments: \n  - 2.9% processing fee applies\n  - Accepted worldwide\n\n\
Processing time: 1-2 hours during business days",
    "🏦 Banking & Payment Procedures:\n\n\
1. MPesa: \n   - Paybill: 404040\n   - Account: Registration number\n   - Max: Ksh 150,000/day\n\
2. Bank: \n   - Deposit at Equity or KCB\n   - Account numbers listed on portal\n\
3. Online: \n   - Secure gateway with Visa/Mastercard\n   - Mobile banking integration\n\n\
Always keep transaction ID until payment appears in portal",
];

const FEES_DEADLINES: &[&str] = &[
    "⏰ Fee Deadlines & Penalties:\n\n\
• Semester 1: August 31st\n\
• Semester 2: January 31st\n\
• Late Payment Penalties:\n  - 1-7 days late: Ksh 500\n  - 8-14 days late: Ksh 1,000\n  - After 15 days: Course deregistration\n\
• Installment Plans:\n  - 50% by deadline + 25% monthly (admin fee Ksh 2,000)\n  - Apply at finance.mku.ac.ke/installments\n\n\
⚠️ Exam access requires 75% fee payment",
    "📅 Fee Payment Schedule:\n\n\
• Semester 1 Deadline: August 31\n\
• Semester 2 Deadline: January 31\n\
• Consequences of Late Payment:\n  - Ksh 500 penalty (1-7 days)\n  - Ksh 1,000 penalty (8-14 days)\n  - Course deregistration after 15 days\n\
• Installment Options:\n  - Minimum 50% down payment\n  - Balance in monthly installments\n  - Ksh 2,000 administration fee",
    "⌛ Important Fee Deadlines:\n\n\
• Full Payment Due:\n  - Semester 1: August 31\n  - Semester 2: January 31\n\
• Late Fees:\n  - Week 1: Ksh 500\n  - Week 2: Ksh 1,000\n  - After 2 weeks: Deregistration risk\n\
• Payment Plans:\n  - Available with 50% initial payment\n  - Monthly installments with Ksh 2,000 fee\n\n\
Note: 75% payment required for exam access",
];

const FEES_BALANCE: &[&str] = &[
    "💰 Fee Balance Management:\n\n\
• Check Balance:\n  1. Portal → Finance → Fee Statement\n  2. SMS 'BAL <REGNO>' to 40440 (Ksh 5 charge)\n\
• Discrepancy Resolution:\n  - Submit payment evidence to finance@mku.ac.ke\n  - Visit Finance Office (Mon-Fri 8am-3pm)\n\
• Scholarship Deductions:\n  - Reflect 48hrs after award letter submission\n\
• Refunds: \n  - 30-day processing (requires VC approval)\n  - Ksh 500 processing fee",
    "📊 Managing Fee Balances:\n\n\
• View Balance:\n  - Online portal: Finance section\n  - SMS service: 'BAL [REGNO]' to 40440 (Ksh 5)\n\
• Dispute Resolution:\n  - Email evidence to finance@mku.ac.ke\n  - Office visit with payment proof\n\
• Scholarships:\n  - Processed within 2 business days\n\
• Refunds:\n  - 30-day processing period\n  - Ksh 500 administrative fee",
    "💼 Fee Balance Information:\n\n\
1. Checking Balance:\n   - Portal: Login → Finance → Statement\n   - SMS: Text 'BAL [RegNo]' to 40440\n\
2. Discrepancies:\n   - Submit proof to finance office\n   - Office hours: 8am-3pm weekdays\n\
3. Scholarships:\n   - Applied 48 hours after approval\n\
4. Refunds:\n   - Require Vice Chancellor approval\n   - Ksh 500 processing charge",
];

const FEES_SPONSORSHIP: &[&str] = &[
    "🎓 Sponsorship Information:\n\n\
• HELB Applications:\n  - Submit through www.helb.co.ke\n  - MKU code: 10500\n  - Disbursement: 6-8 weeks after approval\n\
• County Bursaries:\n  - Submit approval letters to County Bursary Office\n  - Processing: 2 weeks\n\
• Corporate Sponsorships:\n  - Requires letter on company letterhead\n  - 15% discount on tuition\n\n\
Track status at portal.mku.ac.ke/sponsorship",
    "🏫 Financial Sponsorship Details:\n\n\
• HELB:\n  - Apply at HELB portal\n  - Institution code: 10500\n  - Funds released in 6-8 weeks\n\
• County Bursaries:\n  - Present award letter to bursary office\n  - Processed within 14 days\n\
• Corporate Sponsors:\n  - Official company letter required\n  - 15% tuition discount\n\n\
Status tracking: studentportal.mku.ac.ke/sponsorship",
    "🎒 Sponsorship Programs:\n\n\
1. HELB Loans:\n   - Application: helb.co.ke\n   - MKU Code: 10500\n   - Disbursement: 1.5-2 months\n\
2. County Bursaries:\n   - Submit approval to County Office\n   - Processing: 2 weeks\n\
3. Corporate:\n   - Company letterhead required\n   - 15% discount on tuition fees\n\n\
Check status on student portal",
];

// ============================================================================
// Administration
// ============================================================================

const ADMIN_REGISTRAR: &[&str] = &[
    "📄 Registrar's Office Services:\n\n\
• Official Transcripts:\n  - Cost: Ksh 1,000 (standard), Ksh 2,000 (express)\n  - Processing: 3 working days\n  - Collection: Thika Main Campus, Admin Block Rm 12\n\
• Certificate Replacement:\n  - Affidavit required (Ksh 500 stamp duty)\n  - Fee: Ksh 5,000\n  - Processing: 21 working days\n\
• Course Registration Issues:\n  - Late registration fee: Ksh 500\n  - Deadline: 2 weeks after semester start",
    "🏫 Registrar Services:\n\n\
• Transcript Requests:\n  - Standard: Ksh 1,000 (3 days)\n  - Express: Ksh 2,000 (24 hours)\n  - Pickup: Admin Block Room 12\n\
• Lost Certificates:\n  - Police report required\n  - Affidavit (Ksh 500)\n  - Replacement fee: Ksh 5,000\n\
• Registration Problems:\n  - Late fee: Ksh 500\n  - Must be resolved within 14 days",
    "📜 Registrar Procedures:\n\n\
1. Transcripts:\n   - Apply online or in-person\n   - Fees: Ksh 1,000 regular, Ksh 2,000 rush\n\
2. Certificate Replacement:\n   - File police report\n   - Obtain sworn affidavit\n   - Pay Ksh 5,000 fee\n\
3. Registration Issues:\n   - Late registration: Ksh 500 fee\n   - Course changes require department approval",
];

const ADMIN_DEAN: &[&str] = &[
    "👨‍🎓 Dean of Students Department:\n\n\
• Counseling Services:\n  - Bookings: wellness.mku.ac.ke\n  - Crisis Line: 0800720500 (24/7)\n\
• Clubs & Societies:\n  - Registration fee: Ksh 500 per semester\n  - Funding: Up to Ksh 50,000 per event\n\
• Disability Services:\n  - Special exam arrangements\n  - Assistive technology available\n\
• Hostel Complaints:\n  - Submit via studentportal.mku.ac.ke/complaints",
    "👩‍🎓 Student Welfare Services:\n\n\
1. Counseling:\n   - Online booking system\n   - Emergency hotline: 0800720500\n\
2. Student Organizations:\n   - Registration: Ksh 500/semester\n   - Event funding available\n\
3. Disability Support:\n   - Exam accommodations\n   - Special equipment\n\
4. Complaints:\n   - Hostel issues via online portal",
    "🏢 Dean's Office Services:\n\n\
• Mental Health Support:\n  - Free counseling sessions\n  - 24/7 crisis support\n\
• Clubs & Activities:\n  - Annual registration fee\n  - Funding for events\n\
• Accessibility Services:\n  - Special exam arrangements\n  - Assistive devices\n\
• Complaint Resolution:\n  - Online submission portal",
];

const ADMIN_EXAMS: &[&str] = &[
    "📝 Examination Office Procedures:\n\n\
• Exam Card Requirements:\n  - Printed from portal\n  - 75% course attendance\n  - Valid student ID\n\
• Special Exams:\n  - Medical cases: Submit within 72hrs\n  - Fee: Ksh 1,000 per paper\n\
• Result Inquiries:\n  - Form RE/01 at exam office\n  - Processing: 14 days\n\n\
Office Hours: 8:30am-4pm (Mon-Fri)",
    "📚 Exam Services:\n\n\
• Exam Cards:\n  - Portal printout required\n  - 75% attendance mandatory\n  - Valid ID needed\n\
• Special Examinations:\n  - Medical documentation required\n  - Fee: Ksh 1,000/paper\n\
• Result Issues:\n  - Submit Form RE/01\n  - 2-week processing\n\n\
Office open weekdays 8:30am-4pm",
    "📋 Examination Procedures:\n\n\
1. Exam Cards:\n   - Print from student portal\n   - Require 75% attendance\n   - Must present student ID\n\
2. Special Exams:\n   - Submit within 3 days of medical issue\n   - Ksh 1,000 per paper fee\n\
3. Result Queries:\n   - Form RE/01 required\n   - Processing time: 14 days",
];

const ADMIN_FINANCE: &[&str] = &[
    "🏦 Finance Office Services:\n\n\
• Fee Receipts:\n  - Instant via portal\n  - Hard copies: Finance Block Rm 7\n\
• Payment Plans:\n  - Minimum 50% downpayment\n  - Admin fee: 5% of balance\n\
• Sponsorship Coordination:\n  - HELB/County updates\n  - Corporate billing\n\n\
EFT Payments:\nBank: Equity Bank\nAcc: 0780263456007\nSwift: EQBLKENA",
    "💰 Financial Services:\n\n\
• Receipts:\n  - Digital copies on portal\n  - Paper copies: Finance Office\n\
• Installment Plans:\n  - 50% minimum payment\n  - 5% administration fee\n\
• Sponsorship Management:\n  - HELB disbursements\n  - County bursary processing\n\n\
Bank Transfers:\nEquity Bank\nAccount: 0780263456007\nSwift: EQBLKENA",
    "💳 Finance Department:\n\n\
1. Receipts:\n   - Instant digital copies\n   - Hard copies at Finance Block\n\
2. Payment Plans:\n   - 50% initial payment\n   - 5% admin fee on balance\n\
3. Sponsorships:\n   - HELB coordination\n   - Corporate billing\n\n\
Bank Details:\nEquity Bank\nAcc: 0780263456007",
];

// ============================================================================
// Hostels
// ============================================================================

const HOSTELS_APPLICATION: &[&str] = &[
    "📝 Hostel Application Process:\n\n\
• Eligibility:\n  - First years guaranteed\n  - Continuing students: 2.5 GPA minimum\n\
• Application Steps:\n  1. Portal → Accommodation → Apply\n  2. Pay Ksh 5,000 deposit\n  3. Upload medical certificate\n\
• Allocation Timeline:\n  - Semester start: 2 weeks prior\n  - Late applications: Rolling basis\n\
• Required Documents:\n  - Medical cover proof\n  - ID copy\n  - Admission letter",
    "🏠 Applying for Accommodation:\n\n\
• Who Can Apply:\n  - New students automatically\n  - Returning: Minimum 2.5 GPA\n\
• Process:\n  1. Student portal accommodation section\n  2. Pay Ksh 5,000 deposit\n  3. Submit health documents\n\
• Timing:\n  - Assignments 2 weeks before semester\n  - Late applications considered\n\
• Documents:\n  - Health insurance\n  - National ID\n  - Admission letter",
    "📋 Hostel Application Details:\n\n\
Eligibility:\n- First-year students: Guaranteed\n- Continuing: 2.5 GPA required\n\n\
Application:\n1. Online portal application\n2. Ksh 5,000 deposit payment\n3. Medical certificate upload\n\n\
Timeline:\n- Allocations announced 14 days before semester\n- Late applications processed as received\n\n\
Required Documents:\n- Medical insurance proof\n- ID document\n- Admission letter",
];

const HOSTELS_FEES: &[&str] = &[
    "🏦 Hostel Fee Structure:\n\n\
• Standard Hostels:\n  - Double room: Ksh 26,000/semester\n  - Triple room: Ksh 22,000/semester\n\
• Premium Hostels (AC):\n  - Single: Ksh 48,000\n  - Double: Ksh 34,000\n\
• Additional Charges:\n  - Caution fee: Ksh 3,000 (refundable)\n  - Cleaning fee: Ksh 1,500\n\
• Payment Deadline: \n  - 7 days after allocation\n\n\
⚠️ Non-refundable after moving in",
    "💰 Accommodation Costs:\n\n\
• Standard Rooms:\n  - Shared (3-person): Ksh 22,000\n  - Shared (2-person): Ksh 26,000\n\
• Premium Rooms:\n  - Single occupancy: Ksh 48,000\n  - Double occupancy: Ksh 34,000\n\
• Extra Fees:\n  - Refundable deposit: Ksh 3,000\n  - Cleaning: Ksh 1,500/semester\n\
• Payment Due:\n  - Within 7 days of assignment\n\n\
Note: Fees non-refundable after occupancy",
    "💵 Hostel Pricing:\n\n\
1. Standard Options:\n   - Triple: Ksh 22,000\n   - Double: Ksh 26,000\n\
2. Premium Options:\n   - Single: Ksh 48,000\n   - Double: Ksh 34,000\n\
3. Additional Costs:\n   - Deposit: Ksh 3,000 (refundable)\n   - Cleaning: Ksh 1,500\n\
4. Payment Deadline:\n   - 7 days after room assignment",
];

const HOSTELS_RULES: &[&str] = &[
    "📜 Hostel Regulations:\n\n\
• Visiting Hours:\n  - Weekdays: 4pm-7pm\n  - Weekends: 10am-8pm\n\
• Curfew:\n  - Sun-Thu: 10pm\n  - Fri-Sat: Midnight\n\
• Prohibited Items:\n  - Cooking appliances\n  - Pets\n  - Alcohol\n\
• Violation Penalties:\n  - 1st offense: Warning\n  - 2nd offense: Ksh 2,000 fine\n  - 3rd offense: Eviction",
    "🏠 Accommodation Rules:\n\n\
• Guest Hours:\n  - Mon-Fri: 4pm-7pm\n  - Sat-Sun: 10am-8pm\n\
• Curfew Times:\n  - Sunday-Thursday: 10pm\n  - Friday-Saturday: Midnight\n\
• Banned Items:\n  - Electrical cooking devices\n  - Animals\n  - Alcohol\n\
• Penalties:\n  - First violation: Warning\n  - Second: Ksh 2,000 fine\n  - Third: Eviction from hostel",
    "📜 Hostel Policies:\n\n\
1. Visitor Hours:\n   - Weekdays: 4-7 PM\n   - Weekends: 10 AM-8 PM\n\
2. Curfew:\n   - Sun-Thu: 10 PM\n   - Fri-Sat: 12 AM\n\
3. Prohibited:\n   - Cooking equipment\n   - Pets\n   - Alcoholic beverages\n\
4. Consequences:\n   - Warning (first)\n   - Ksh 2,000 fine (second)\n   - Eviction (third offense)",
];

const HOSTELS_FACILITIES: &[&str] = &[
    "🏠 Hostel Facilities:\n\n\
• Standard Amenities:\n  - Study rooms (open 24/7)\n  - Laundry (Ksh 200 per load)\n  - WiFi (5GB free/month)\n\
• Premium Features:\n  - Ensuite bathrooms\n  - Study desks\n  - 24hr hot water\n\
• Security:\n  - Biometric access\n  - Guards patrols\n  - CCTV coverage\n\
• Maintenance:\n  - Report issues via the hostels app\n  - Response time: 24hrs",
    "🏢 Hostel Amenities:\n\n\
• Basic Facilities:\n  - 24-hour study areas\n  - Laundry services (Ksh 200/load)\n  - Free WiFi (5GB monthly)\n\
• Premium Features:\n  - Private bathrooms\n  - Dedicated study spaces\n  - Constant hot water\n\
• Security Measures:\n  - Fingerprint access\n  - Regular security patrols\n  - Surveillance cameras\n\
• Maintenance:\n  - Report via mobile app\n  - 24-hour response target",
    "🏡 Accommodation Features:\n\n\
1. Standard:\n   - Study rooms open 24/7\n   - Laundry: Ksh 200 per load\n   - WiFi: 5GB free monthly\n\
2. Premium:\n   - Private bathrooms\n   - Study desks\n   - 24-hour hot water\n\
3. Security:\n   - Biometric entry\n   - Guard patrols\n   - CCTV systems\n\
4. Maintenance:\n   - App-based reporting\n   - 24-hour response time",
];

// ============================================================================
// Results
// ============================================================================

const RESULTS_ACCESS: &[&str] = &[
    "🔍 Accessing Examination Results:\n\n\
• Portal Access:\n  1. Login to studentportal.mku.ac.ke\n  2. Navigate: Academics → Exam Results\n\
• SMS Service:\n  - Text 'RESULT <REGNO> <SEM>' to 20881\n  - Cost: Ksh 25 per request\n\
• Result Release Schedule:\n  - Regular Exams: 4 weeks after exams\n  - Supplementary: 6 weeks\n\
• Missing Results:\n  - Contact department coordinator\n  - Submit Form RE/02 at exam office",
    "📱 Checking Results:\n\n\
• Online Portal:\n  - Student portal → Academics → Results\n\
• SMS Method:\n  - Format: 'RESULT [RegNo] [Semester]'\n  - Send to 20881 (Ksh 25)\n\
• Release Timeline:\n  - Regular exams: 4 weeks\n  - Supplements: 6 weeks\n\
• Missing Grades:\n  - Contact department head\n  - Submit Form RE/02",
    "📊 Result Access Methods:\n\n\
1. Portal:\n   - Login to student portal\n   - Navigate to Academics section\n\
2. SMS:\n   - Text 'RESULT <REGNO> <SEM>' to 20881\n   - Charge: Ksh 25\n\
3. Release Schedule:\n   - Main exams: 4 weeks\n   - Supplements: 6 weeks\n\
4. Missing Results:\n   - Department coordinator\n   - Form RE/02 required",
];

const RESULTS_TRANSCRIPTS: &[&str] = &[
    "📄 Transcript Services:\n\n\
• Ordering Process:\n  1. Portal: Services → Transcript Request\n  2. Pay Ksh 1,000 (standard) / Ksh 2,000 (express)\n\
• Delivery Options:\n  - Collection: Registrar's Office\n  - Courier: DHL (Ksh 1,500 additional)\n  - Email: Verified institutions only\n\
• Processing Time:\n  - Standard: 5 working days\n  - Express: 24 hours\n\
• Verification:\n  - Employers: verify.mku.ac.ke\n  - PIN: Provided on transcript",
    "🎓 Academic Transcripts:\n\n\
• Ordering:\n  - Student portal services section\n  - Fees: Ksh 1,000 standard, Ksh 2,000 express\n\
• Delivery:\n  - Pickup at Registrar's Office\n  - DHL courier (+Ksh 1,500)\n  - Secure email to institutions\n\
• Processing:\n  - Standard: 5 business days\n  - Express: 24 hours\n\
• Verification:\n  - Online portal: verify.mku.ac.ke\n  - Unique PIN provided",
    "📜 Transcript Procedures:\n\n\
1. Request Process:\n   - Portal services section\n   - Pay Ksh 1,000 (standard) or Ksh 2,000 (express)\n\
2. Delivery Methods:\n   - Registrar's Office pickup\n   - DHL courier (extra Ksh 1,500)\n   - Secure email (institutions only)\n\
3. Processing Times:\n   - Standard: 5 days\n   - Express: 24 hours\n\
4. Verification:\n   - verify.mku.ac.ke\n   - Transcript includes PIN",
];

const RESULTS_REMARKING: &[&str] = &[
    "🔄 Result Remarking Process:\n\n\
• Eligibility:\n  - Within 30 days of result release\n  - Fee: Ksh 1,000 per paper\n\
• Application Steps:\n  1. Obtain Form RE/03 from exam office\n  2. Pay at finance office\n  3. Submit completed form\n\
• Possible Outcomes:\n  - Grade increase\n  - Grade unchanged\n  - No grade reduction policy\n\
• Timeline:\n  - 21 working days processing\n\n\
⚠️ Supplementary scripts not re-marked",
    "📝 Remarking Procedures:\n\n\
• Eligibility Period:\n  - 30 days from result release\n  - Fee: Ksh 1,000/paper\n\
• Application:\n  1. Get Form RE/03\n  2. Pay at finance\n  3. Submit form\n\
• Outcomes:\n  - Possible grade improvement\n  - No downgrading\n  - Original grade maintained\n\
• Processing:\n  - 3 weeks\n\n\
Note: Supp exams not eligible",
    "🔄 Requesting Remarking:\n\n\
1. Eligibility:\n   - Within 30 days of results\n   - Ksh 1,000 per paper\n\
2. Process:\n   - Form RE/03 from exams office\n   - Payment at finance\n   - Form submission\n\
3. Possible Results:\n   - Grade improvement\n   - No change (no downgrade)\n\
4. Timeline:\n   - 21 working days\n\n\
Note: Supplementary exams excluded",
];

const RESULTS_SUPPLEMENTARY: &[&str] = &[
    "🔄 Supplementary Examinations:\n\n\
• Registration:\n  - Portal: Academics → Supp Exams\n  - Deadline: 2 weeks after results\n\
• Fees:\n  - Ksh 1,500 per unit\n  - Late registration: Ksh 500 penalty\n\
• Exam Schedule:\n  - Released 3 weeks before exams\n  - Venue: Main campus only\n\
• Special Considerations:\n  - Medical cases: Submit within 72hrs of missed exam\n  - Form RE/04 required",
    "📝 Supplementary Exams:\n\n\
• Registration:\n  - Student portal academics section\n  - Deadline: 14 days after results\n\
• Fees:\n  - Ksh 1,500 per unit\n  - Late fee: Ksh 500\n\
• Schedule:\n  - Published 3 weeks prior\n  - Main campus only\n\
• Special Cases:\n  - Medical issues: Submit within 3 days\n  - Form RE/04 needed",
    "🔄 Retake Examinations:\n\n\
1. Registration:\n   - Portal: Academics → Supplementary\n   - Deadline: 2 weeks post-results\n\
2. Fees:\n   - Ksh 1,500 per unit\n   - Late penalty: Ksh 500\n\
3. Schedule:\n   - Announced 3 weeks before exams\n   - Only at main campus\n\
4. Special Circumstances:\n   - Medical: Report within 72 hours\n   - Form RE/04 required",
];

// ============================================================================
// General
// ============================================================================

const GENERAL_LIBRARY: &[&str] = &[
    "📚 Library Services:\n\n\
• Operating Hours:\n  - Weekdays: 8am-10pm\n  - Saturdays: 9am-4pm\n  - Sundays: Closed\n\
• Resources:\n  - 250,000+ physical books\n  - 45,000+ e-journals (access via library.mku.ac.ke)\n  - 15,000 thesis collection\n\
• Borrowing Privileges:\n  - Undergrads: 4 books (14 days)\n  - Postgrads: 6 books (30 days)\n\
• Special Services:\n  - Turnitin plagiarism checks\n  - Research consultations\n  - Inter-library loans",
    "🏫 Library Information:\n\n\
• Hours:\n  - Mon-Fri: 8am-10pm\n  - Sat: 9am-4pm\n  - Sun: Closed\n\
• Collections:\n  - Print books: 250,000+\n  - E-journals: 45,000+\n  - Theses: 15,000+\n\
• Borrowing:\n  - Undergrads: 4 items for 2 weeks\n  - Postgrads: 6 items for 1 month\n\
• Services:\n  - Plagiarism checking\n  - Research assistance\n  - Interlibrary loans",
    "📖 Library Facilities:\n\n\
1. Opening Hours:\n   - Weekdays: 8 AM - 10 PM\n   - Saturday: 9 AM - 4 PM\n   - Sunday: Closed\n\
2. Resources:\n   - Books: 250,000+\n   - E-journals: 45,000+\n   - Theses: 15,000+\n\
3. Borrowing:\n   - Undergraduate: 4 items (14 days)\n   - Postgraduate: 6 items (30 days)\n\
4. Special Services:\n   - Turnitin checks\n   - Research support\n   - External loans",
];

const GENERAL_CONTACTS: &[&str] = &[
    "📞 Essential University Contacts:\n\n\
• Emergency Services:\n  - Security: 0712345600\n  - Medical: 0733355555\n\
• Administration:\n  - Registrar: registrar@mku.ac.ke\n  - Finance: finance@mku.ac.ke\n  - Academics: academics@mku.ac.ke\n\
• Campus Locations:\n  - Main Campus: Thika\n  - Nairobi Campus: Ronald Ngala St\n  - Mombasa Campus: Mvita\n\
• Online: www.mku.ac.ke",
    "📱 Important Contacts:\n\n\
• Emergencies:\n  - Security: 0712345600\n  - Medical: 0733355555\n\
• Administration:\n  - Registrar: registrar@mku.ac.ke\n  - Finance: finance@mku.ac.ke\n  - Academics: academics@mku.ac.ke\n\
• Campuses:\n  - Thika (Main)\n  - Nairobi CBD\n  - Mombasa\n\
• Website: mku.ac.ke",
    "📲 University Contacts:\n\n\
1. Emergency:\n   - Security: 0712345600\n   - Medical: 0733355555\n\
2. Administration:\n   - Registrar: registrar@mku.ac.ke\n   - Finance: finance@mku.ac.ke\n   - Academics: academics@mku.ac.ke\n\
3. Campuses:\n   - Main: Thika\n   - Nairobi: Ronald Ngala\n   - Mombasa: Mvita\n\
4. Website: www.mku.ac.ke",
];

const GENERAL_EVENTS: &[&str] = &[
    "🎉 University Events Calendar:\n\n\
• Annual Events:\n  - Cultural Festival: March 15-19\n  - Career Fair: April 10\n  - Innovation Week: October\n\
• Student Activities:\n  - Clubs: 45 registered clubs\n  - Sports: Football, basketball, athletics\n  - Trips: Annual wildlife safaris\n\
• Event Registration:\n  - Portal: events.mku.ac.ke\n  - Deadlines: 1 week before event\n\
• Attendance Certificates: \n  - 75% participation required",
    "📅 Campus Events:\n\n\
• Major Annual Events:\n  - Cultural Fest: March 15-19\n  - Career Expo: April 10\n  - Tech Innovation Week: October\n\
• Student Activities:\n  - 45+ student clubs\n  - Sports competitions\n  - Educational trips\n\
• Registration:\n  - events.mku.ac.ke\n  - Deadline: 7 days prior\n\
• Certification:\n  - Requires 75% attendance",
    "🗓️ University Activities:\n\n\
1. Annual Events:\n   - Cultural Festival: March\n   - Career Fair: April\n   - Innovation Week: October\n\
2. Student Life:\n   - 45+ clubs\n   - Sports programs\n   - Safari trips\n\
3. Registration:\n   - Online portal\n   - 1 week before event\n\
4. Certificates:\n   - Minimum 75% participation",
];

const GENERAL_FACILITIES: &[&str] = &[
    "🏫 Campus Facilities:\n\n\
• Learning Facilities:\n  - 15 Computer labs\n  - Science labs (Biology, Chemistry, Physics)\n  - 24/7 Study Zones\n\
• Recreational:\n  - Olympic-size swimming pool\n  - Gym (Ksh 500/month)\n  - Basketball/tennis courts\n\
• Health Services:\n  - Clinic: 24/7 emergency services\n  - Counseling: Free for students\n\
• Prayer Rooms:\n  - Christian, Muslim, Hindu spaces\n\n\
Campus maps: maps.mku.ac.ke",
    "🏢 University Facilities:\n\n\
• Academic:\n  - 15 computer laboratories\n  - Science labs for all disciplines\n  - 24-hour study areas\n\
• Recreation:\n  - Olympic swimming pool\n  - Fitness center (Ksh 500/month)\n  - Sports courts\n\
• Health:\n  - 24/7 medical clinic\n  - Free counseling\n\
• Religious:\n  - Multi-faith prayer rooms\n\n\
Maps: maps.mku.ac.ke",
    "🏛️ Campus Infrastructure:\n\n\
1. Learning Spaces:\n   - 15+ computer labs\n   - Specialized science labs\n   - 24/7 study zones\n\
2. Recreation:\n   - Swimming pool\n   - Gym (Ksh 500/month)\n   - Sports courts\n\
3. Health Services:\n   - 24-hour clinic\n   - Counseling services\n\
4. Religious:\n   - Prayer rooms for all faiths\n\n\
Campus maps: maps.mku.ac.ke",
];
