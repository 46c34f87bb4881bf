// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Compiled-in legal templates, one per document type.

use std::collections::HashMap;

use darrow_core::DocumentType;

use crate::fill::remaining_placeholders;

const DELAWARE_CHARTER: &str = "CERTIFICATE OF INCORPORATION
OF
{{COMPANY_NAME}}

FIRST: The name of this corporation is {{COMPANY_NAME}}.

SECOND: The address of the registered office of this corporation in the State of Delaware is {{REGISTERED_OFFICE_ADDRESS}}, and the name of its registered agent at such address is {{REGISTERED_AGENT_NAME}}.

THIRD: The nature of the business or purposes to be conducted or promoted is {{BUSINESS_PURPOSE}}.

FOURTH: The total number of shares of all classes of stock which the corporation shall have authority to issue is {{TOTAL_SHARES}} shares of Common Stock, each with a par value of $0.0001 per share.

FIFTH: The name and mailing address of the incorporator is:
{{INCORPORATOR_NAME}}
{{INCORPORATOR_ADDRESS}}

SIXTH: The corporation is to have perpetual existence.

IN WITNESS WHEREOF, I have executed this Certificate of Incorporation this _____ day of __________, 20__.

_____________________
{{INCORPORATOR_NAME}}, Incorporator";

const SAFE_POST: &str = "SAFE
(Simple Agreement for Future Equity)

THIS CERTIFIES THAT in exchange for the payment by {{INVESTOR_NAME}} (the \"Investor\") of {{PURCHASE_AMOUNT}} (the \"Purchase Amount\") on or about {{DATE}}, {{COMPANY_NAME}}, a Delaware corporation (the \"Company\"), issues to the Investor the right to certain shares of the Company's Capital Stock, subject to the terms described below.

The \"Post-Money Valuation Cap\" is {{VALUATION_CAP}}. The \"Discount Rate\" is {{DISCOUNT_RATE}}.

SECTION 1. EVENTS

(a) Equity Financing. If there is an Equity Financing before the termination of this Safe, on the initial closing of such Equity Financing, this Safe will automatically convert into the number of shares of Safe Preferred Stock equal to the Purchase Amount divided by the Conversion Price.

(b) Liquidity Event. If there is a Liquidity Event before the termination of this Safe, the Investor will be entitled to receive a portion of Proceeds, due and payable immediately prior to, or concurrent with, the consummation of such Liquidity Event.

(c) Dissolution Event. If there is a Dissolution Event before the termination of this Safe, the Investor will automatically be entitled to receive a portion of Proceeds equal to the Purchase Amount.

SECTION 2. MISCELLANEOUS

Any provision of this Safe may be amended, waived or modified by written consent of the Company and the Investor. This Safe shall be governed by the laws of the State of {{GOVERNING_LAW}}.

IN WITNESS WHEREOF, the undersigned have caused this Safe to be duly executed and delivered.

{{COMPANY_NAME}}
By: _________________________
Name: {{FOUNDER_NAME}}

INVESTOR:
By: _________________________
Name: {{INVESTOR_NAME}}";

const OFFER_LETTER: &str = "{{COMPANY_NAME}}

{{COMPANY_ADDRESS}}

{{DATE}}

Dear {{CANDIDATE_NAME}},

We are pleased to offer you employment with {{COMPANY_NAME}} in the position of {{JOB_TITLE}}.

**Employment Terms**

**Position:** {{JOB_TITLE}}

**Start Date:** {{START_DATE}}

**Annual Salary:** ${{ANNUAL_SALARY}}

**Reporting Manager:** {{REPORTING_MANAGER}}

**Benefits:** This position includes our standard benefits package, including health insurance, dental insurance, and 401(k) participation, subject to the terms and conditions of the applicable benefit plans.

**Stock Options:** We will recommend to the Board of Directors that you be granted the option to purchase up to {{STOCK_OPTIONS}} shares of Common Stock under our {{PLAN_NAME}} at fair market value. The shares will vest at {{VESTING_CLIFF}}% after your first anniversary, then {{MONTHLY_VESTING}}% per month thereafter, subject to Board approval.

**Employment Relationship:** This offer is contingent upon satisfactory completion of our standard background check process. Your employment with {{COMPANY_NAME}} is at-will, meaning that either you or the company may terminate the employment relationship at any time, with or without cause or notice.

**Confidentiality:** As a condition of employment, you must sign and abide by our standard Employee Invention Assignment and Confidentiality Agreement.

Please confirm your acceptance of this offer by signing and returning this letter by {{OFFER_EXPIRATION_DATE}}.

We look forward to having you join our team!

Sincerely,

{{HIRING_MANAGER_NAME}}
{{HIRING_MANAGER_TITLE}}

ACCEPTANCE
I have read and understood the terms of this offer and accept them.

Signature: _________________________
Date:
{{CANDIDATE_NAME}}";

const RSPA: &str = "RESTRICTED STOCK PURCHASE AGREEMENT

This Restricted Stock Purchase Agreement (this \"Agreement\") is made as of {{PURCHASE_DATE}} between {{COMPANY_NAME}}, a Delaware corporation (the \"Company\"), and {{PURCHASER_NAME}} (the \"Purchaser\").

SECTION 1. PURCHASE AND SALE OF STOCK

Subject to the terms and conditions of this Agreement, the Purchaser agrees to purchase from the Company, and the Company agrees to sell to the Purchaser, {{SHARES_PURCHASED}} shares of Common Stock of the Company (the \"Shares\") at a purchase price of {{PURCHASE_PRICE_PER_SHARE}} per share, for a total purchase price of {{TOTAL_PURCHASE_PRICE}} (the \"Purchase Price\").

SECTION 2. VESTING SCHEDULE

The Shares shall vest according to the following schedule: {{VESTING_SCHEDULE}}

SECTION 3. REPURCHASE RIGHT

The Company shall have the right to repurchase any unvested Shares upon termination of Purchaser's relationship with the Company.

SECTION 4. TRANSFER RESTRICTIONS

The Shares may not be transferred without the Company's prior written consent.

IN WITNESS WHEREOF, the parties have executed this Agreement as of the date first written above.

{{COMPANY_NAME}}
By: _________________________
Name:
Title:

PURCHASER:
_________________________
{{PURCHASER_NAME}}";

const BOARD_CONSENT: &str = "{{CONSENT_TYPE}} CONSENT OF
{{COMPANY_NAME}}

The undersigned, constituting all of the {{CONSENT_TYPE}} of {{COMPANY_NAME}}, a Delaware corporation (the \"Company\"), hereby consent to the adoption of the following resolutions:

RESOLUTION 1: {{RESOLUTION_TITLE_1}}

RESOLVED: {{RESOLUTION_TEXT_1}}

RESOLUTION 2: {{RESOLUTION_TITLE_2}}

RESOLVED: {{RESOLUTION_TEXT_2}}

This consent may be executed in counterparts, each of which shall be deemed an original and all of which together shall constitute one and the same instrument.

Dated: {{DATE}}

SIGNATURES:

_________________________
[Name], [Title]

_________________________
[Name], [Title]";

/// The template text for a document type.
pub fn template_for(document_type: DocumentType) -> &'static str {
    match document_type {
        DocumentType::DelawareCharter => DELAWARE_CHARTER,
        DocumentType::SafePost => SAFE_POST,
        DocumentType::OfferLetter => OFFER_LETTER,
        DocumentType::Rspa => RSPA,
        DocumentType::BoardConsent => BOARD_CONSENT,
    }
}

/// Fields that must come from the user rather than from fallbacks.
pub fn required_fields(document_type: DocumentType) -> &'static [&'static str] {
    match document_type {
        DocumentType::DelawareCharter => {
            &["COMPANY_NAME", "INCORPORATOR_NAME", "INCORPORATOR_ADDRESS"]
        }
        DocumentType::SafePost => &[
            "INVESTOR_NAME",
            "COMPANY_NAME",
            "PURCHASE_AMOUNT",
            "VALUATION_CAP",
        ],
        DocumentType::OfferLetter => &[
            "COMPANY_NAME",
            "CANDIDATE_NAME",
            "JOB_TITLE",
            "ANNUAL_SALARY",
        ],
        DocumentType::Rspa => &[
            "COMPANY_NAME",
            "PURCHASER_NAME",
            "SHARES_PURCHASED",
            "PURCHASE_PRICE_PER_SHARE",
        ],
        DocumentType::BoardConsent => {
            &["COMPANY_NAME", "RESOLUTION_TITLE_1", "RESOLUTION_TEXT_1"]
        }
    }
}

/// Required fields that are absent or blank in `inputs`. Keys match
/// case-insensitively.
pub fn missing_required_fields(
    document_type: DocumentType,
    inputs: &HashMap<String, String>,
) -> Vec<&'static str> {
    let present: HashMap<String, &str> = inputs
        .iter()
        .map(|(key, value)| (key.trim().to_uppercase(), value.as_str()))
        .collect();

    required_fields(document_type)
        .iter()
        .copied()
        .filter(|field| {
            present
                .get(*field)
                .is_none_or(|value| value.trim().is_empty())
        })
        .collect()
}

/// Every distinct placeholder name in the template for `document_type`.
pub fn placeholder_names(document_type: DocumentType) -> Vec<String> {
    let mut names = remaining_placeholders(template_for(document_type));
    let mut seen = std::collections::HashSet::new();
    names.retain(|name| seen.insert(name.clone()));
    names
}
