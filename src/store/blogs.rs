use super::{MarketStore, BLOGS_KEY};
use crate::error::StoreResult;
use crate::models::blog::{slugify, BlogDraft, BlogPatch, BlogPost, BlogStatus};
use crate::utils::ids::new_id;
use chrono::Utc;
use tracing::info;

impl MarketStore {
    /// Creates a post with a slug derived from the title, kept unique
    /// within the collection by suffixing a counter on collision.
    pub fn create_blog(&mut self, draft: BlogDraft) -> StoreResult<BlogPost> {
        let slug = self.unique_slug(&slugify(&draft.title));
        let published_at = match draft.status {
            BlogStatus::Published => Some(Utc::now()),
            BlogStatus::Draft => None,
        };

        let post = BlogPost {
            id: new_id("blog"),
            title: draft.title,
            slug,
            author: draft.author,
            excerpt: draft.excerpt,
            body: draft.body,
            categories: draft.categories,
            hero_img: draft.hero_img,
            status: draft.status,
            published_at,
        };

        let mut new_blogs = self.blogs.clone();
        new_blogs.push(post.clone());
        self.persist(BLOGS_KEY, &new_blogs)?;
        self.blogs = new_blogs;

        info!(blog_id = %post.id, slug = %post.slug, "blog post created");
        Ok(post)
    }

    /// Partial update by id; unknown ids are a no-op. The slug is stable
    /// across title edits, so published URLs keep working.
    pub fn update_blog(&mut self, blog_id: &str, patch: BlogPatch) -> StoreResult<()> {
        let Some(idx) = self.blogs.iter().position(|b| b.id == blog_id) else {
            return Ok(());
        };
        let mut new_blogs = self.blogs.clone();
        new_blogs[idx].apply(patch);
        self.persist(BLOGS_KEY, &new_blogs)?;
        self.blogs = new_blogs;
        Ok(())
    }

    pub fn delete_blog(&mut self, blog_id: &str) -> StoreResult<()> {
        if !self.blogs.iter().any(|b| b.id == blog_id) {
            return Ok(());
        }
        let new_blogs: Vec<_> = self.blogs.iter().filter(|b| b.id != blog_id).cloned().collect();
        self.persist(BLOGS_KEY, &new_blogs)?;
        self.blogs = new_blogs;
        info!(blog_id, "blog post deleted");
        Ok(())
    }

    fn unique_slug(&self, base: &str) -> String {
        let taken = |candidate: &str| self.blogs.iter().any(|b| b.slug == candidate);
        if !taken(base) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if !taken(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}
