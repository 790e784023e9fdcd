use tracing::debug;
use url::Url;

use crate::{error::CatalogError, types::Project};

/// Display order: the first entry renders first.
const PROJECTS: &[Project] = &[
    Project::new(
        "Paytm Money: Stocks, MF, IPO",
        "Join the Paytm Money family today and join the 21 million+ investors who have already benefited from our services. Our all-in-one equity investment and wealth management app provides seamless access to equity investment, futures & options trading.",
    )
    .with_img_src("/images/paytm.png")
    .with_href("https://apps.apple.com/in/app/paytm-money-stocks-mf-ipo/id1344431352"),
    Project::new(
        "Paytm: Secure UPI Paymentse",
        "Send money to your friends and family using your mobile number via Paytm UPI. Including those who are not on Paytm.Scan any QR code and make payments at grocery stores, petrol pumps, restaurants etc.Recharge your mobile and pay your utility bills (electricity, gas, water, broadband etc.) easily.",
    )
    .with_img_src("/images/paytm-upi.png")
    .with_href("https://apps.apple.com/us/app/paytm-secure-upi-payments/id473941634"),
];

const _: () = assert_well_formed(PROJECTS);

// Rejects blank required fields while compiling. Only ASCII whitespace is
// seen here; `validate` also catches Unicode whitespace at startup.
const fn assert_well_formed(projects: &[Project]) {
    let mut i = 0;
    while i < projects.len() {
        let project = &projects[i];
        assert!(!is_blank(project.title), "project title must not be blank");
        assert!(
            !is_blank(project.description),
            "project description must not be blank"
        );
        if let Some(img_src) = project.img_src {
            assert!(!img_src.is_empty(), "project imgSrc must not be empty");
        }
        i += 1;
    }
}

const fn is_blank(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_whitespace() {
            return false;
        }
        i += 1;
    }
    true
}

pub fn get_projects() -> &'static [Project] {
    PROJECTS
}

pub fn get_project(index: usize) -> Option<&'static Project> {
    PROJECTS.get(index)
}

/// Checks every entry and returns the first violation found.
///
/// `href` must parse as an absolute URI. `imgSrc` must be a non-empty
/// relative path; anything that parses as an absolute URL is rejected.
pub fn validate(projects: &[Project]) -> Result<(), CatalogError> {
    for (index, project) in projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                index,
                field: "title",
            });
        }
        if project.description.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                index,
                field: "description",
            });
        }
        if let Some(href) = project.href {
            if let Err(source) = Url::parse(href) {
                return Err(CatalogError::InvalidHref {
                    index,
                    title: project.title,
                    href,
                    source,
                });
            }
        }
        if let Some(img_src) = project.img_src {
            validate_img_src(index, project.title, img_src)?;
        }
        debug!("Project {} (\"{}\") is well formed", index, project.title);
    }
    Ok(())
}

fn validate_img_src(
    index: usize,
    title: &'static str,
    img_src: &'static str,
) -> Result<(), CatalogError> {
    let reason = if img_src.is_empty() {
        Some("path cannot be empty")
    } else if img_src.contains('\0') {
        Some("path contains null bytes")
    } else if Url::parse(img_src).is_ok() {
        Some("path must be relative")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(CatalogError::InvalidImgSrc {
            index,
            title,
            img_src,
            reason,
        }),
        None => Ok(()),
    }
}
