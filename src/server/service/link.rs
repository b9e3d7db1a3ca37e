//! Hypermedia link construction.
//!
//! `LinkBuilder` turns a resource path and either an id or a pagination state into the
//! ordered list of links attached to a response. It never touches storage and never
//! guesses host information: when built without a valid absolute base URL every method
//! returns an empty list.

use url::Url;

use crate::{model::link::LinkDto, server::model::link::Link};

pub const YARDS: &str = "yards";
pub const VEHICLES: &str = "vehicles";

/// Path of the employee collection of a yard.
pub fn yard_employees_path(yard_id: &str) -> String {
    format!("{}/{}/employees", YARDS, yard_id)
}

/// Path of the vehicle collection of a yard.
pub fn yard_vehicles_path(yard_id: &str) -> String {
    format!("{}/{}/vehicles", YARDS, yard_id)
}

/// Related links appended after the base resource links.
enum Related {
    Yard,
    Vehicle,
    Nothing,
}

/// Builds resource and collection links against a fixed absolute base URL.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder {
    base: Option<String>,
}

impl LinkBuilder {
    /// Creates a builder for the given base URL.
    ///
    /// The base must be an absolute `http` or `https` URL with a host, e.g.
    /// `https://api.example.com/api`. Anything else, including `None`, yields a builder
    /// that produces no links.
    ///
    /// # Arguments
    /// - `base_url` - Absolute base URL all hrefs are prefixed with
    ///
    /// # Returns
    /// - `LinkBuilder` - Builder ready to produce links
    pub fn new(base_url: Option<&str>) -> Self {
        let base = base_url.and_then(|raw| {
            let parsed = Url::parse(raw.trim()).ok()?;
            let is_http = matches!(parsed.scheme(), "http" | "https");
            if !is_http || parsed.host_str().is_none() {
                return None;
            }
            Some(raw.trim().trim_end_matches('/').to_string())
        });

        Self { base }
    }

    /// Links for a single resource.
    ///
    /// Always emits `self` (GET), `update` (PATCH) and `delete` (DELETE) in that order.
    /// Yards additionally get `employees` and `vehicles` (GET); vehicles get a `qr-code`
    /// lookup link (GET). Any other resource type gets only the three base links.
    ///
    /// # Arguments
    /// - `resource_type` - Resource collection path, e.g. `"yards"` or `"yards/yrd_1/vehicles"`
    /// - `resource_id` - Identifier of the resource
    ///
    /// # Returns
    /// - `Vec<LinkDto>` - Ordered links, empty when no base URL is available
    pub fn resource_links(&self, resource_type: &str, resource_id: &str) -> Vec<LinkDto> {
        let Some(base) = self.base.as_deref() else {
            return Vec::new();
        };

        let (path, related) = classify(resource_type);
        let name = singular_title(&path);
        let href = format!("{}/{}/{}", base, path, resource_id);

        let mut links = vec![
            Link::new(&href, "self", "GET", format!("Get {} Details", name)),
            Link::new(&href, "update", "PATCH", format!("Update {}", name)),
            Link::new(&href, "delete", "DELETE", format!("Delete {}", name)),
        ];

        match related {
            Related::Yard => {
                links.push(Link::new(
                    format!("{}/{}/{}/employees", base, YARDS, resource_id),
                    "employees",
                    "GET",
                    "List Yard Employees",
                ));
                links.push(Link::new(
                    format!("{}/{}/{}/vehicles", base, YARDS, resource_id),
                    "vehicles",
                    "GET",
                    "List Yard Vehicles",
                ));
            }
            Related::Vehicle => {
                links.push(Link::new(
                    format!("{}/{}?qrCodeId={}", base, VEHICLES, resource_id),
                    "qr-code",
                    "GET",
                    "Get Vehicle by QR Code",
                ));
            }
            Related::Nothing => {}
        }

        links.into_iter().map(Link::into_dto).collect()
    }

    /// Links for one page of a collection.
    ///
    /// Always emits `self` (current page, GET) and `create` (POST to the collection
    /// root). Adds `prev` and `first` when past the first page, and `next` and `last`
    /// when before the last page, in the order self, create, prev, next, first, last.
    ///
    /// # Arguments
    /// - `resource_type` - Collection path, e.g. `"yards"`
    /// - `page_number` - Current 1-indexed page
    /// - `page_size` - Page size, repeated on every page link
    /// - `total_pages` - Total number of pages
    ///
    /// # Returns
    /// - `Vec<LinkDto>` - Ordered links, empty when no base URL is available
    pub fn collection_links(
        &self,
        resource_type: &str,
        page_number: u64,
        page_size: u64,
        total_pages: u64,
    ) -> Vec<LinkDto> {
        let Some(base) = self.base.as_deref() else {
            return Vec::new();
        };

        let (path, _) = classify(resource_type);
        let root = format!("{}/{}", base, path);
        let page_href = |page: u64| format!("{}?pageNumber={}&pageSize={}", root, page, page_size);

        let mut links = vec![
            Link::new(
                page_href(page_number),
                "self",
                "GET",
                format!("List {}", title_case(last_segment(&path))),
            ),
            Link::new(
                &root,
                "create",
                "POST",
                format!("Create New {}", singular_title(&path)),
            ),
        ];

        let has_prev = page_number > 1;
        let has_next = page_number < total_pages;

        if has_prev {
            links.push(Link::new(
                page_href(page_number - 1),
                "prev",
                "GET",
                "Previous Page",
            ));
        }
        if has_next {
            links.push(Link::new(
                page_href(page_number + 1),
                "next",
                "GET",
                "Next Page",
            ));
        }
        if has_prev {
            links.push(Link::new(page_href(1), "first", "GET", "First Page"));
        }
        if has_next {
            links.push(Link::new(page_href(total_pages), "last", "GET", "Last Page"));
        }

        links.into_iter().map(Link::into_dto).collect()
    }
}

/// Removes leading, trailing and duplicate slashes.
fn normalize_path(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Resolves the canonical path and related-link set through the closed lookup table.
fn classify(resource_type: &str) -> (String, Related) {
    let path = normalize_path(resource_type);

    match path.to_ascii_lowercase().as_str() {
        "yard" | "yards" => (YARDS.to_string(), Related::Yard),
        "vehicle" | "vehicles" => (VEHICLES.to_string(), Related::Vehicle),
        _ => (path, Related::Nothing),
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// `"yards"` -> `"Yard"`, `"qr-codes"` -> `"Qr Code"`.
fn singular_title(path: &str) -> String {
    let segment = last_segment(path);
    title_case(segment.strip_suffix('s').unwrap_or(segment))
}

fn title_case(value: &str) -> String {
    value
        .replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com/api";

    fn rels(links: &[LinkDto]) -> Vec<&str> {
        links.iter().map(|l| l.rel.as_str()).collect()
    }

    #[test]
    fn yard_resource_has_five_links() {
        let links = LinkBuilder::new(Some(BASE)).resource_links("yard", "yrd_1");

        assert_eq!(
            rels(&links),
            vec!["self", "update", "delete", "employees", "vehicles"]
        );
        let methods: Vec<_> = links.iter().map(|l| l.method.as_str()).collect();
        assert_eq!(methods, vec!["GET", "PATCH", "DELETE", "GET", "GET"]);
        assert_eq!(links[0].href, "https://api.example.com/api/yards/yrd_1");
        assert_eq!(
            links[3].href,
            "https://api.example.com/api/yards/yrd_1/employees"
        );
        assert_eq!(links[0].title, "Get Yard Details");
        assert!(links.iter().all(|l| l.media_type == "application/json"));
    }

    #[test]
    fn plural_yard_type_gets_same_links() {
        let singular = LinkBuilder::new(Some(BASE)).resource_links("yard", "yrd_1");
        let plural = LinkBuilder::new(Some(BASE)).resource_links("/Yards/", "yrd_1");

        assert_eq!(singular, plural);
    }

    #[test]
    fn vehicle_resource_has_qr_code_lookup() {
        let links = LinkBuilder::new(Some(BASE)).resource_links("vehicles", "veh_1");

        assert_eq!(rels(&links), vec!["self", "update", "delete", "qr-code"]);
        assert_eq!(
            links[3].href,
            "https://api.example.com/api/vehicles?qrCodeId=veh_1"
        );
        assert_eq!(links[3].title, "Get Vehicle by QR Code");
    }

    #[test]
    fn nested_resource_gets_only_base_links() {
        let links = LinkBuilder::new(Some(BASE))
            .resource_links("//yards/yrd_1//employees/", "emp_1");

        assert_eq!(rels(&links), vec!["self", "update", "delete"]);
        assert_eq!(
            links[0].href,
            "https://api.example.com/api/yards/yrd_1/employees/emp_1"
        );
        assert_eq!(links[1].title, "Update Employee");
    }

    #[test]
    fn single_page_has_only_self_and_create() {
        let builder = LinkBuilder::new(Some(BASE));

        assert_eq!(rels(&builder.collection_links("yards", 1, 10, 1)), vec!["self", "create"]);
        assert_eq!(rels(&builder.collection_links("yards", 1, 10, 0)), vec!["self", "create"]);
    }

    #[test]
    fn middle_page_has_all_navigation_links() {
        let links = LinkBuilder::new(Some(BASE)).collection_links("yards", 2, 10, 3);

        assert_eq!(
            rels(&links),
            vec!["self", "create", "prev", "next", "first", "last"]
        );
        assert_eq!(
            links[0].href,
            "https://api.example.com/api/yards?pageNumber=2&pageSize=10"
        );
        assert_eq!(links[1].href, "https://api.example.com/api/yards");
        assert_eq!(links[1].method, "POST");
        assert!(links[2].href.contains("pageNumber=1&"));
        assert!(links[3].href.contains("pageNumber=3&"));
        assert!(links[4].href.contains("pageNumber=1&"));
        assert!(links[5].href.contains("pageNumber=3&"));
        assert!(links
            .iter()
            .filter(|l| l.rel != "create")
            .all(|l| l.method == "GET"));
    }

    #[test]
    fn last_page_has_prev_and_first_only() {
        let links = LinkBuilder::new(Some(BASE)).collection_links("yards", 3, 10, 3);

        assert_eq!(rels(&links), vec!["self", "create", "prev", "first"]);
    }

    #[test]
    fn collection_titles() {
        let links = LinkBuilder::new(Some(BASE)).collection_links("yards", 1, 5, 2);

        assert_eq!(links[0].title, "List Yards");
        assert_eq!(links[1].title, "Create New Yard");
        assert_eq!(links[2].title, "Next Page");
    }

    #[test]
    fn missing_or_invalid_base_yields_no_links() {
        for base in [None, Some("not a url"), Some("ftp://host/api"), Some("/api")] {
            let builder = LinkBuilder::new(base);

            assert!(builder.resource_links("yards", "yrd_1").is_empty());
            assert!(builder.collection_links("yards", 2, 10, 3).is_empty());
        }
    }

    #[test]
    fn trailing_slash_in_base_is_dropped() {
        let links = LinkBuilder::new(Some("http://localhost:8080/api/")).resource_links("yards", "yrd_1");

        assert_eq!(links[0].href, "http://localhost:8080/api/yards/yrd_1");
    }
}
