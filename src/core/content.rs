// Testimonial records shown on the sphere.

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub src: &'static str,
    pub alt: &'static str,
    pub text: &'static str,
    pub author_name: &'static str,
    pub author_title: &'static str,
    pub division: &'static str,
}

struct BaseRecord {
    id: &'static str,
    src: &'static str,
    alt: &'static str,
    text: &'static str,
    author_name: &'static str,
    author_title: &'static str,
    division: &'static str,
}

const IT: &str = "IT & Digital Solutions";
const MEDICAL: &str = "Medical & Pharmaceuticals";
const LOGISTICS: &str = "Warehousing & Logistics";

const BASE_TESTIMONIALS: [BaseRecord; 9] = [
    BaseRecord {
        id: "testimonial-1",
        src: "https://images.unsplash.com/photo-1487958449943-2429e8be8625?w=400&h=400&fit=crop",
        alt: "Digital Infrastructure",
        text: "Rejoda transformed our digital infrastructure with their innovative IT solutions. The government website network they built for us has streamlined our operations and improved citizen engagement significantly.",
        author_name: "Dr. Ahmed Hassan",
        author_title: "Regional Commissioner, Pemba",
        division: IT,
    },
    BaseRecord {
        id: "testimonial-2",
        src: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=400&h=400&fit=crop",
        alt: "Medical Equipment",
        text: "SKS Pharma Ltd's platform has revolutionized how we source medical equipment. The seamless online ordering system and reliable delivery have made our healthcare operations more efficient than ever.",
        author_name: "Dr. Fatuma Mwinyi",
        author_title: "Hospital Administrator, Dar es Salaam",
        division: MEDICAL,
    },
    BaseRecord {
        id: "testimonial-3",
        src: "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?w=400&h=400&fit=crop",
        alt: "Warehouse Storage",
        text: "Their warehousing and logistics solutions have been a game-changer for our business. The digital inventory tracking system ensures we never run out of stock, and their security integration gives us complete peace of mind.",
        author_name: "James Mwangi",
        author_title: "Operations Manager, Nairobi",
        division: LOGISTICS,
    },
    BaseRecord {
        id: "testimonial-4",
        src: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=400&h=400&fit=crop",
        alt: "Urban Development",
        text: "The waste management portal and mobile app developed by Rejoda have transformed how we handle urban waste collection. Real-time reporting and efficient routing have improved our service delivery dramatically.",
        author_name: "Sarah Komba",
        author_title: "City Director, Mwanza",
        division: IT,
    },
    BaseRecord {
        id: "testimonial-5",
        src: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=400&h=400&fit=crop",
        alt: "Pharmaceutical Distribution",
        text: "Working with Rejoda's pharmaceutical division has been exceptional. Their comprehensive product range and reliable distribution network ensure we always have the medical supplies we need when we need them.",
        author_name: "Dr. Peter Kimathi",
        author_title: "Chief Pharmacist, Arusha",
        division: MEDICAL,
    },
    BaseRecord {
        id: "testimonial-6",
        src: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=400&h=400&fit=crop",
        alt: "Cloud Technology",
        text: "Rejoda's cloud deployment and cybersecurity consulting services have significantly enhanced our data security. Their expertise in modern technology solutions has positioned us as a leader in digital innovation.",
        author_name: "Michael Ochieng",
        author_title: "IT Director, Kampala",
        division: IT,
    },
    BaseRecord {
        id: "testimonial-7",
        src: "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=400&h=400&fit=crop",
        alt: "Mobile Applications",
        text: "The mobile applications developed by Rejoda have transformed how we interact with our customers. Their Android and iOS apps are intuitive, reliable, and have significantly improved our service delivery.",
        author_name: "Amina Juma",
        author_title: "CEO, Tech Solutions Ltd",
        division: IT,
    },
    BaseRecord {
        id: "testimonial-8",
        src: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=400&h=400&fit=crop",
        alt: "Medical Supplies",
        text: "Rejoda's pharmaceutical distribution network is unmatched. They ensure timely delivery of critical medical supplies, which has been crucial for our operations in remote areas.",
        author_name: "Dr. John Mwangi",
        author_title: "Medical Director, Rural Clinic",
        division: MEDICAL,
    },
    BaseRecord {
        id: "testimonial-9",
        src: "https://images.unsplash.com/photo-1563729784474-d77dbb933a9e?w=400&h=400&fit=crop",
        alt: "Logistics Operations",
        text: "The logistics support from Rejoda has streamlined our supply chain operations. Their modern warehousing facilities and digital tracking systems have reduced our operational costs significantly.",
        author_name: "Robert Kipchoge",
        author_title: "Supply Chain Manager",
        division: LOGISTICS,
    },
];

impl From<&BaseRecord> for Testimonial {
    fn from(b: &BaseRecord) -> Self {
        Self {
            id: b.id.to_string(),
            src: b.src,
            alt: b.alt,
            text: b.text,
            author_name: b.author_name,
            author_title: b.author_title,
            division: b.division,
        }
    }
}

/// The built-in set of distinct testimonials.
pub fn base_testimonials() -> Vec<Testimonial> {
    BASE_TESTIMONIALS.iter().map(Testimonial::from).collect()
}

/// Cycle `base` until `total` entries exist. Replica `i` keeps its base
/// record's fields and gets the id `"{base_id}-{i / base.len()}"`.
pub fn replicate(base: &[Testimonial], total: usize) -> Vec<Testimonial> {
    if base.is_empty() {
        return Vec::new();
    }
    (0..total)
        .map(|i| {
            let b = &base[i % base.len()];
            Testimonial {
                id: format!("{}-{}", b.id, i / base.len()),
                ..b.clone()
            }
        })
        .collect()
}
