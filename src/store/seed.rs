use crate::models::blog::{slugify, BlogPost, BlogStatus};
use crate::models::job::{Job, JobStatus};
use chrono::{DateTime, TimeZone, Utc};

/// Example postings shown before any employer has posted. Ids are fixed so
/// repeated seeding is idempotent across sessions.
pub fn jobs() -> Vec<Job> {
    vec![
        seed_job(
            "job_1",
            "Industrial Electrician",
            "Northern Smelter Operations",
            "Industrial",
            "Electrician",
            "Sudbury",
            "ON",
            "Canada",
            "$45-$55/hr",
            true,
            false,
            "Days",
            "Shutdown maintenance on smelter facility. 442A required. \
             Experience with high-voltage systems essential.",
        ),
        seed_job(
            "job_2",
            "CWB Welder",
            "Hamilton Steel Fabrication",
            "Commercial",
            "Welder",
            "Hamilton",
            "ON",
            "Canada",
            "$38-$48/hr",
            true,
            false,
            "Days",
            "Structural steel welding for commercial tower project. CWB Level 1 required.",
        ),
        seed_job(
            "job_3",
            "Pipefitter",
            "Gulf Coast Refining",
            "Industrial",
            "Pipefitter",
            "Houston",
            "TX",
            "USA",
            "$42-$50/hr",
            false,
            true,
            "Rotating",
            "Refinery expansion project. Red Seal preferred. Camp accommodation provided.",
        ),
    ]
}

pub fn blogs() -> Vec<BlogPost> {
    vec![
        seed_blog(
            "blog_1",
            "How hospitals procure ICI crews: lessons from P3 builds",
            "Michael Chen",
            "Public-private partnerships are changing how institutional projects secure skilled trades.",
            &["Institutional", "Procurement"],
            "https://images.unsplash.com/photo-1519494026892-80bbd2d6fd0d?w=800&q=80",
            day(2025, 3, 15),
        ),
        seed_blog(
            "blog_2",
            "Shutdown staffing: best practices for mill & smelter turnarounds",
            "Sarah Martinez",
            "Planning a major industrial shutdown requires precision staffing.",
            &["Industrial", "Best Practices"],
            "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=800&q=80",
            day(2025, 3, 12),
        ),
        seed_blog(
            "blog_3",
            "Union vs non-union in heavy civil: cost, safety, and schedule",
            "David Thompson",
            "A comprehensive analysis of union and non-union labor models in heavy civil construction.",
            &["Civil", "Analysis"],
            "https://images.unsplash.com/photo-1590496793907-4d5c6c8ea3fd?w=800&q=80",
            day(2025, 3, 8),
        ),
        seed_blog(
            "blog_4",
            "Digital document control in construction: the new normal",
            "Emily Rodriguez",
            "Digital document management is revolutionizing ICI projects.",
            &["Technology", "Commercial"],
            "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&q=80",
            day(2025, 3, 5),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed_job(
    id: &str,
    title: &str,
    company: &str,
    sector: &str,
    trade: &str,
    city: &str,
    region: &str,
    country: &str,
    wage_band: &str,
    union_job: bool,
    camp_loa: bool,
    shift: &str,
    description: &str,
) -> Job {
    Job {
        id: id.to_string(),
        title: title.to_string(),
        company: company.to_string(),
        sector: sector.to_string(),
        trade: trade.to_string(),
        city: city.to_string(),
        region: region.to_string(),
        country: country.to_string(),
        wage_band: wage_band.to_string(),
        union_job,
        camp_loa,
        shift: shift.to_string(),
        description: description.to_string(),
        posted_by: "seed_employer".to_string(),
        posted_at: Utc::now(),
        status: JobStatus::Open,
        archived: false,
        views: 0,
        applications_count: 0,
    }
}

fn seed_blog(
    id: &str,
    title: &str,
    author: &str,
    excerpt: &str,
    categories: &[&str],
    hero_img: &str,
    published_at: DateTime<Utc>,
) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        slug: slugify(title),
        author: author.to_string(),
        excerpt: excerpt.to_string(),
        body: "Full article content here...".to_string(),
        categories: categories.iter().map(|c| c.to_string()).collect(),
        hero_img: hero_img.to_string(),
        status: BlogStatus::Published,
        published_at: Some(published_at),
    }
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("seed dates are valid")
}
