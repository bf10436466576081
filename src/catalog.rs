/// A single bookable offering under a service, e.g. "SEO Audit" under
/// "Digital Marketing". Looked up by id within its owning service only.
#[derive(Clone, Debug, PartialEq)]
pub struct Subservice {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub subservices: Vec<Subservice>,
}

impl Service {
    pub fn subservice(&self, id: i32) -> Option<&Subservice> {
        self.subservices.iter().find(|s| s.id == id)
    }
}

/// Read-only service catalog. Built once at startup and handed to the view
/// layer as a shared reference; there is no write path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn service(&self, id: i32) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Resolves the two route parameters into a catalog pair. Ids arrive as
    /// raw path segments; anything that does not parse as an integer is
    /// treated the same as an id that is not in the catalog.
    pub fn resolve(&self, service_id: &str, subservice_id: &str) -> Option<(&Service, &Subservice)> {
        let service_id: i32 = service_id.trim().parse().ok()?;
        let subservice_id: i32 = subservice_id.trim().parse().ok()?;
        let service = self.service(service_id)?;
        let subservice = service.subservice(subservice_id)?;
        Some((service, subservice))
    }

    /// The production catalog.
    pub fn builtin() -> Self {
        fn sub(id: i32, name: &str, description: &str, image: &str) -> Subservice {
            Subservice {
                id,
                name: name.to_string(),
                description: description.to_string(),
                image: image.to_string(),
            }
        }

        Self::new(vec![
            Service {
                id: 1,
                name: "Digital Marketing".to_string(),
                subservices: vec![
                    sub(
                        1,
                        "SEO Audit",
                        "A full technical and content audit of your site with a prioritized action plan to climb the rankings.",
                        "/assets/services/seo-audit.jpg",
                    ),
                    sub(
                        2,
                        "Social Media Management",
                        "Content calendars, posting, and community engagement across the platforms your customers actually use.",
                        "/assets/services/social-media.jpg",
                    ),
                    sub(
                        3,
                        "Performance Ads",
                        "Paid campaigns on Google and Meta, tuned weekly against real conversion data.",
                        "/assets/services/performance-ads.jpg",
                    ),
                ],
            },
            Service {
                id: 2,
                name: "Web Development".to_string(),
                subservices: vec![
                    sub(
                        1,
                        "Business Website",
                        "A fast, mobile-first website that presents your business professionally and converts visitors.",
                        "/assets/services/business-website.jpg",
                    ),
                    sub(
                        2,
                        "E-commerce Store",
                        "A complete online store with payments, inventory, and order notifications wired up.",
                        "/assets/services/ecommerce.jpg",
                    ),
                ],
            },
            Service {
                id: 3,
                name: "Branding & Design".to_string(),
                subservices: vec![
                    sub(
                        1,
                        "Logo & Identity",
                        "A distinctive logo with a full identity kit: colors, typography, and usage guidelines.",
                        "/assets/services/logo-identity.jpg",
                    ),
                    sub(
                        2,
                        "Brochure Design",
                        "Print-ready brochures and one-pagers that match your brand and sell your offer.",
                        "/assets/services/brochure.jpg",
                    ),
                ],
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Service {
                id: 1,
                name: "Marketing".to_string(),
                subservices: vec![Subservice {
                    id: 2,
                    name: "SEO Audit".to_string(),
                    description: "Audit".to_string(),
                    image: "/a.jpg".to_string(),
                }],
            },
            Service {
                id: 7,
                name: "Design".to_string(),
                subservices: vec![],
            },
        ])
    }

    #[test]
    fn resolves_existing_pair() {
        let catalog = catalog();
        let (service, subservice) = catalog.resolve("1", "2").expect("pair should resolve");
        assert_eq!(service.name, "Marketing");
        assert_eq!(subservice.name, "SEO Audit");
    }

    #[test]
    fn missing_service_is_none() {
        assert_eq!(catalog().resolve("99", "2"), None);
    }

    #[test]
    fn missing_subservice_is_none() {
        assert_eq!(catalog().resolve("1", "99"), None);
        // service exists but has no subservices at all
        assert_eq!(catalog().resolve("7", "1"), None);
    }

    #[test]
    fn malformed_ids_behave_like_missing() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("abc", "2"), None);
        assert_eq!(catalog.resolve("1", "two"), None);
        assert_eq!(catalog.resolve("", ""), None);
        assert_eq!(catalog.resolve("1.5", "2"), None);
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        assert!(catalog().resolve(" 1 ", " 2 ").is_some());
    }

    #[test]
    fn builtin_catalog_pairs_all_resolve() {
        let catalog = Catalog::builtin();
        assert!(!catalog.services().is_empty());
        for service in catalog.services() {
            assert!(!service.subservices.is_empty());
            for subservice in &service.subservices {
                let resolved =
                    catalog.resolve(&service.id.to_string(), &subservice.id.to_string());
                assert_eq!(resolved, Some((service, subservice)));
            }
        }
    }
}
