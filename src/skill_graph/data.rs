//! Embedded skill data.

use std::collections::BTreeMap;

use super::progress::TrackedSkill;
use super::types::{Category, CategoryInfo, SkillCatalog, SkillNode};

/// Presentation data for every category.
pub fn default_categories() -> BTreeMap<Category, CategoryInfo> {
	[
		(Category::Frontend, "Frontend", "#3b82f6", "🎨"),
		(Category::Backend, "Backend", "#10b981", "⚙️"),
		(Category::Devops, "DevOps", "#f59e0b", "🚀"),
		(Category::Ai, "AI/ML", "#8b5cf6", "🤖"),
		(Category::Design, "Design", "#ec4899", "✨"),
	]
	.into_iter()
	.map(|(category, name, color, icon)| {
		(
			category,
			CategoryInfo {
				name: name.into(),
				color: color.into(),
				icon: icon.into(),
			},
		)
	})
	.collect()
}

/// The catalog served by [`StaticSkillSource`](super::StaticSkillSource).
pub fn static_catalog() -> SkillCatalog {
	use Category::*;

	let skills = vec![
		SkillNode::new("html", "HTML5", Frontend, 95, "Semantic markup and modern HTML features"),
		SkillNode::new("css", "CSS3", Frontend, 90, "Advanced styling, flexbox, grid, animations")
			.with_prerequisites(["html"]),
		SkillNode::new("javascript", "JavaScript", Frontend, 92, "ES6+, async/await, closures, prototypes")
			.with_prerequisites(["html"]),
		SkillNode::new("react", "React", Frontend, 88, "Hooks, context, performance optimization")
			.with_prerequisites(["javascript"]),
		SkillNode::new("nextjs", "Next.js", Frontend, 85, "SSR, SSG, API routes, deployment")
			.with_prerequisites(["react"]),
		SkillNode::new("typescript", "TypeScript", Frontend, 87, "Type safety, interfaces, generics")
			.with_prerequisites(["javascript"]),
		SkillNode::new("nodejs", "Node.js", Backend, 85, "Server-side JavaScript, npm ecosystem")
			.with_prerequisites(["javascript"]),
		SkillNode::new("express", "Express.js", Backend, 82, "RESTful APIs, middleware, routing")
			.with_prerequisites(["nodejs"]),
		SkillNode::new("python", "Python", Backend, 88, "Data structures, OOP, functional programming"),
		SkillNode::new("django", "Django", Backend, 78, "MVC, ORM, authentication, admin")
			.with_prerequisites(["python"]),
		SkillNode::new("postgresql", "PostgreSQL", Backend, 80, "Complex queries, indexing, performance tuning"),
		SkillNode::new("docker", "Docker", Devops, 83, "Containerization, multi-stage builds"),
		SkillNode::new("kubernetes", "Kubernetes", Devops, 75, "Container orchestration, scaling")
			.with_prerequisites(["docker"]),
		SkillNode::new("aws", "AWS", Devops, 79, "EC2, S3, Lambda, RDS, CloudFormation"),
		SkillNode::new("cicd", "CI/CD", Devops, 81, "GitHub Actions, Jenkins, automated testing"),
		SkillNode::new("machinelearning", "Machine Learning", Ai, 76, "Supervised/unsupervised learning, model evaluation")
			.with_prerequisites(["python"]),
		SkillNode::new("tensorflow", "TensorFlow", Ai, 72, "Neural networks, deep learning models")
			.with_prerequisites(["machinelearning"]),
		SkillNode::new("nlp", "NLP", Ai, 74, "Text processing, sentiment analysis, transformers")
			.with_prerequisites(["machinelearning"]),
		SkillNode::new("opencv", "OpenCV", Ai, 68, "Computer vision, image processing")
			.with_prerequisites(["python"]),
		SkillNode::new("figma", "Figma", Design, 82, "UI/UX design, prototyping, design systems"),
		SkillNode::new("photoshop", "Photoshop", Design, 75, "Image editing, digital art, web graphics"),
		SkillNode::new("uxdesign", "UX Design", Design, 78, "User research, wireframing, usability testing")
			.with_prerequisites(["figma"]),
	];

	SkillCatalog {
		skills,
		categories: default_categories(),
	}
}

/// Seed state for the progress tree. Levels are 1..=5 stars.
pub fn learning_path() -> Vec<TrackedSkill> {
	use Category::*;

	vec![
		TrackedSkill::new("html-css", "HTML/CSS", Frontend, 5, "Fundamental web markup and styling languages")
			.completed()
			.with_resources(["MDN Web Docs", "CSS Tricks", "Flexbox Froggy"]),
		TrackedSkill::new("javascript", "JavaScript", Frontend, 5, "Dynamic programming language for web development")
			.completed()
			.with_prerequisites(["html-css"])
			.with_resources(["JavaScript.info", "Eloquent JavaScript", "You Don't Know JS"]),
		TrackedSkill::new("react", "React", Frontend, 4, "Popular JavaScript library for building user interfaces")
			.completed()
			.with_progress(90)
			.with_prerequisites(["javascript"])
			.with_resources(["React Docs", "React Tutorial", "Create React App"]),
		TrackedSkill::new("threejs", "Three.js", Frontend, 4, "3D graphics library for creating WebGL applications")
			.completed()
			.with_progress(85)
			.with_prerequisites(["javascript", "react"])
			.with_resources(["Three.js Docs", "Three.js Journey", "WebGL Fundamentals"]),
		TrackedSkill::new("nodejs", "Node.js", Backend, 4, "JavaScript runtime for server-side development")
			.completed()
			.with_progress(80)
			.with_prerequisites(["javascript"])
			.with_resources(["Node.js Docs", "NodeSchool", "Express.js Guide"]),
		TrackedSkill::new("database-design", "Database Design", Backend, 3, "Designing efficient and scalable database schemas")
			.with_progress(60)
			.with_prerequisites(["nodejs"])
			.with_resources(["PostgreSQL Tutorial", "MongoDB University", "Database Design Course"]),
		TrackedSkill::new("ui-ux", "UI/UX Design", Design, 3, "User interface and experience design principles")
			.with_progress(45)
			.with_prerequisites(["html-css"])
			.with_resources(["Figma Academy", "Design Systems", "UX Laws"]),
		TrackedSkill::new("devops", "DevOps", Devops, 2, "Development operations and deployment automation")
			.with_progress(20)
			.with_prerequisites(["nodejs", "database-design"])
			.with_resources(["Docker Docs", "AWS Training", "Kubernetes Tutorial"]),
		TrackedSkill::new("ai-ml", "AI/ML", Ai, 2, "Artificial Intelligence and Machine Learning concepts")
			.with_progress(15)
			.with_prerequisites(["database-design", "devops"])
			.with_resources(["TensorFlow.js", "ML Course", "OpenAI API"]),
	]
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::skill_graph::validate::validate;

	#[test]
	fn static_catalog_is_valid() {
		assert_eq!(validate(&static_catalog()), Ok(()));
	}

	#[test]
	fn every_category_has_info() {
		let catalog = static_catalog();
		for category in Category::ALL {
			assert!(catalog.category_info(category).is_some(), "{category}");
		}
	}

	#[test]
	fn learning_path_ids_are_unique() {
		let path = learning_path();
		let mut ids: Vec<_> = path.iter().map(|s| s.id.as_str()).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), path.len());
	}
}
