//
//  tableau-rest
//  api/requests/subscriptions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Subscription bodies.

use serde_json::Value;

use super::{id_ref, parse_opt, required, Fields};
use crate::api::common::Result;

closed_set! {
    /// What a subscription delivers.
    pub enum SubscriptionContent ("subscription content type") {
        Workbook => "Workbook",
        View => "View",
    }
}

closed_set! {
    pub enum PageOrientation ("PDF page orientation") {
        Portrait => "portrait",
        Landscape => "landscape",
    }
}

closed_set! {
    pub enum PageSize ("PDF page size") {
        A3 => "a3",
        A4 => "a4",
        A5 => "a5",
        B5 => "b5",
        Executive => "executive",
        Folio => "folio",
        Ledger => "ledger",
        Legal => "legal",
        Letter => "letter",
        Note => "note",
        Quarto => "quarto",
        Tabloid => "tabloid",
    }
}

/// Delivery options shared by create and update.
fn delivery(
    fields: Fields,
    message: Option<&str>,
    attach_image: Option<bool>,
    attach_pdf: Option<bool>,
    page_orientation: Option<&str>,
    page_size: Option<&str>,
    send_if_view_empty: Option<bool>,
) -> Result<Fields> {
    let orientation: Option<PageOrientation> = parse_opt(page_orientation)?;
    let size: Option<PageSize> = parse_opt(page_size)?;
    Ok(fields
        .put_opt("message", message)
        .put_opt("attachImage", attach_image)
        .put_opt("attachPdf", attach_pdf)
        .put_opt("pageOrientation", orientation.map(|o| o.as_str()))
        .put_opt("pageSizeOption", size.map(|s| s.as_str()))
        .put_opt("sendIfViewEmpty", send_if_view_empty))
}

/// Options for creating a subscription.
#[derive(Debug, Clone, Default)]
pub struct CreateSubscriptionRequest {
    pub subject: String,
    /// `Workbook` or `View`, any case.
    pub content_type: String,
    pub content_id: String,
    pub schedule_id: String,
    pub user_id: String,
    pub message: Option<String>,
    pub attach_image: Option<bool>,
    pub attach_pdf: Option<bool>,
    pub page_orientation: Option<String>,
    pub page_size: Option<String>,
    pub send_if_view_empty: Option<bool>,
}

impl CreateSubscriptionRequest {
    pub fn build(&self) -> Result<Value> {
        let subject = required(&self.subject, "subject")?;
        let content_type: SubscriptionContent = self.content_type.parse()?;
        let content_id = required(&self.content_id, "content id")?;
        let schedule_id = required(&self.schedule_id, "schedule id")?;
        let user_id = required(&self.user_id, "user id")?;

        let fields = delivery(
            Fields::new().put("subject", subject),
            self.message.as_deref(),
            self.attach_image,
            self.attach_pdf,
            self.page_orientation.as_deref(),
            self.page_size.as_deref(),
            self.send_if_view_empty,
        )?;

        Ok(fields
            .put(
                "content",
                Fields::new()
                    .put("type", content_type.as_str())
                    .put("id", content_id)
                    .into_value(),
            )
            .put("schedule", id_ref(schedule_id))
            .put("user", id_ref(user_id))
            .wrap("subscription"))
    }
}

/// Options for updating a subscription; every field is optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateSubscriptionRequest {
    pub subject: Option<String>,
    pub schedule_id: Option<String>,
    pub message: Option<String>,
    pub attach_image: Option<bool>,
    pub attach_pdf: Option<bool>,
    pub page_orientation: Option<String>,
    pub page_size: Option<String>,
    pub send_if_view_empty: Option<bool>,
    pub suspended: Option<bool>,
}

impl UpdateSubscriptionRequest {
    pub fn build(&self) -> Result<Value> {
        let fields = delivery(
            Fields::new().put_opt("subject", self.subject.as_deref()),
            self.message.as_deref(),
            self.attach_image,
            self.attach_pdf,
            self.page_orientation.as_deref(),
            self.page_size.as_deref(),
            self.send_if_view_empty,
        )?
        .put_opt("suspended", self.suspended);

        let fields = match self.schedule_id.as_deref() {
            Some(id) => fields.put("schedule", id_ref(required(id, "schedule id")?)),
            None => fields,
        };
        Ok(fields.wrap("subscription"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ApiError;
    use serde_json::json;

    fn view_subscription() -> CreateSubscriptionRequest {
        CreateSubscriptionRequest {
            subject: "S".into(),
            content_type: "view".into(),
            content_id: "V".into(),
            schedule_id: "SC".into(),
            user_id: "U".into(),
            attach_pdf: Some(true),
            page_orientation: Some("portrait".into()),
            page_size: Some("a4".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_pdf_subscription_body() {
        assert_eq!(
            view_subscription().build().unwrap(),
            json!({"subscription": {
                "subject": "S",
                "attachPdf": true,
                "pageOrientation": "portrait",
                "pageSizeOption": "a4",
                "content": {"type": "View", "id": "V"},
                "schedule": {"id": "SC"},
                "user": {"id": "U"}
            }})
        );
    }

    #[test]
    fn test_enums_are_case_normalized() {
        let mut request = view_subscription();
        request.page_orientation = Some("LANDSCAPE".into());
        request.page_size = Some("Tabloid".into());
        let body = request.build().unwrap();
        assert_eq!(body["subscription"]["pageOrientation"], "landscape");
        assert_eq!(body["subscription"]["pageSizeOption"], "tabloid");
    }

    #[test]
    fn test_rejects_unknown_values() {
        let mut request = view_subscription();
        request.page_size = Some("a2".into());
        assert!(matches!(request.build(), Err(ApiError::InvalidParameter(_))));

        let mut request = view_subscription();
        request.content_type = "datasource".into();
        assert!(request.build().is_err());

        let mut request = view_subscription();
        request.user_id = String::new();
        assert!(request.build().is_err());
    }

    #[test]
    fn test_send_if_view_empty_is_boolean() {
        let mut request = view_subscription();
        request.send_if_view_empty = Some(false);
        assert_eq!(request.build().unwrap()["subscription"]["sendIfViewEmpty"], json!(false));
    }

    #[test]
    fn test_update_only_sends_given_fields() {
        let body = UpdateSubscriptionRequest {
            schedule_id: Some("SC2".into()),
            suspended: Some(true),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(
            body,
            json!({"subscription": {"schedule": {"id": "SC2"}, "suspended": true}})
        );
    }
}
