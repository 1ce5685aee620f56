//! Fixture content
//!
//! Served when the hosted tables are empty or unreachable, so every page
//! has something to show. Fixed counts: 3 programs, 3 projects, 5 blog
//! posts and 5 top posts.

use crate::domain::entity::{BlogPost, Mentor, Program, Project, ProjectStatus, TopPost};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn program(
    id: &str,
    title: &str,
    description: &str,
    slug: &str,
    (duration, price, level, category, students): (&str, &str, &str, &str, &str),
    highlights: &[&str],
    image: &str,
) -> Program {
    Program {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        detailed_content: None,
        highlights: strings(highlights),
        duration: Some(duration.to_string()),
        price: Some(price.to_string()),
        image: Some(image.to_string()),
        slug: Some(slug.to_string()),
        level: Some(level.to_string()),
        category: Some(category.to_string()),
        students: Some(students.to_string()),
        created_at: None,
        updated_at: None,
    }
}

pub fn programs() -> Vec<Program> {
    vec![
        program(
            "27254ebd-c948-45c7-b77b-137ce71ac55",
            "Project Management Professional (PMP)",
            "Khóa học quản lý dự án chuyên nghiệp theo tiêu chuẩn quốc tế PMP",
            "project-management-professional",
            ("4 tháng", "15.000.000 ₫", "Intermediate", "Management", "250"),
            &[
                "Bám sát PMBOK Guide",
                "Luyện đề thi chứng chỉ PMP",
                "Thực hành trên dự án thật",
            ],
            "/dao-tao/1.webp",
        ),
        program(
            "41acb243-c111-41eb-8140-8b20a318320a",
            "Digital Marketing Mastery",
            "Làm chủ marketing số từ cơ bản đến nâng cao",
            "digital-marketing-mastery",
            ("2.5 tháng", "12.000.000 ₫", "Beginner", "Marketing", "180"),
            &["SEO và quảng cáo tìm kiếm", "Mạng xã hội", "Đo lường chiến dịch"],
            "/dao-tao/2.webp",
        ),
        program(
            "8a27ed84-547b-4787-a391-6f34f445e200",
            "Leadership & Management Excellence",
            "Phát triển kỹ năng lãnh đạo và quản lý hiệu quả",
            "leadership-management-excellence",
            ("3 tháng", "18.000.000 ₫", "Advanced", "Leadership", "120"),
            &["Lãnh đạo đội nhóm", "Ra quyết định", "Huấn luyện nhân sự"],
            "/dao-tao/3.webp",
        ),
    ]
}

fn mentor(name: &str, avatar: &str) -> Mentor {
    Mentor {
        name: name.to_string(),
        avatar: Some(avatar.to_string()),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "fixture-project-1".to_string(),
            title: "Hệ thống quản lý học viên".to_string(),
            description: Some(
                "Cổng thông tin theo dõi lộ trình học tập và tiến độ của học viên".to_string(),
            ),
            detail: Some(
                "## Mục tiêu\n\nSố hóa hồ sơ học viên và lịch học của trung tâm.".to_string(),
            ),
            image: Some("/du-an/1.webp".to_string()),
            technologies: strings(&["Next.js", "Supabase", "Tailwind CSS"]),
            mentors: vec![mentor("Nguyễn Tuấn Dũng", "/MSCers/NTD.webp")],
            status: Some(ProjectStatus::Ongoing),
            slug: Some("he-thong-quan-ly-hoc-vien".to_string()),
            category: Some("Web".to_string()),
        },
        Project {
            id: "fixture-project-2".to_string(),
            title: "Phân tích dữ liệu bán hàng".to_string(),
            description: Some(
                "Bảng điều khiển doanh thu cho chuỗi cửa hàng bán lẻ khu vực Mekong".to_string(),
            ),
            detail: Some(
                "## Kết quả\n\nBáo cáo doanh thu tự động hằng tuần bằng Power BI.".to_string(),
            ),
            image: Some("/du-an/2.webp".to_string()),
            technologies: strings(&["Python", "Power BI", "PostgreSQL"]),
            mentors: vec![mentor("MSC Data Team", "/MSCers/data-team.webp")],
            status: Some(ProjectStatus::Completed),
            slug: Some("phan-tich-du-lieu-ban-hang".to_string()),
            category: Some("Data".to_string()),
        },
        Project {
            id: "fixture-project-3".to_string(),
            title: "Chatbot tư vấn tuyển sinh".to_string(),
            description: Some("Trợ lý trả lời câu hỏi về khóa học và lịch khai giảng".to_string()),
            detail: None,
            image: None,
            technologies: strings(&["Node.js", "OpenAI API"]),
            mentors: Vec::new(),
            status: Some(ProjectStatus::Planning),
            slug: Some("chatbot-tu-van-tuyen-sinh".to_string()),
            category: Some("AI".to_string()),
        },
    ]
}

// (id, title, category, views, excerpt, published_at), most viewed first
const RANKED: [(&str, &str, &str, u64, &str, &str); 5] = [
    (
        "1",
        "Hướng dẫn học lập trình Frontend hiệu quả cho người mới bắt đầu",
        "Frontend",
        15420,
        "Những bước đầu tiên để trở thành một frontend developer...",
        "2024-01-15",
    ),
    (
        "2",
        "Top 10 công nghệ Backend đáng học nhất năm 2024",
        "Backend",
        12350,
        "Khám phá những công nghệ backend hot nhất hiện tại...",
        "2024-01-20",
    ),
    (
        "3",
        "Kinh nghiệm thực tập sinh: Từ zero đến hero trong 6 tháng",
        "Kinh nghiệm",
        9870,
        "Chia sẻ hành trình từ thực tập sinh đến developer...",
        "2024-01-10",
    ),
    (
        "4",
        "Database Design: Những nguyên tắc cơ bản cần biết",
        "Database",
        8520,
        "Thiết kế cơ sở dữ liệu hiệu quả và tối ưu...",
        "2024-01-25",
    ),
    (
        "5",
        "DevOps cho người mới: CI/CD và deployment automation",
        "DevOps",
        7230,
        "Tự động hóa quy trình phát triển và triển khai...",
        "2024-01-30",
    ),
];

const FIXTURE_AUTHOR: &str = "MSC Team";

/// Same five articles as the ranking, newest first
pub fn blog_posts() -> Vec<BlogPost> {
    let mut posts: Vec<BlogPost> = RANKED
        .iter()
        .map(|&(id, title, category, _, excerpt, published_at)| BlogPost {
            id: id.to_string(),
            title: title.to_string(),
            content: None,
            excerpt: Some(excerpt.to_string()),
            context: None,
            image: None,
            author: Some(FIXTURE_AUTHOR.to_string()),
            author_avatar: None,
            published_at: Some(published_at.to_string()),
            read_time: None,
            tags: Vec::new(),
            category: Some(category.to_string()),
            slug: None,
        })
        .collect();
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    posts
}

pub fn top_posts() -> Vec<TopPost> {
    RANKED
        .iter()
        .map(|&(id, title, category, views, excerpt, published_at)| TopPost {
            id: id.to_string(),
            title: title.to_string(),
            category: Some(category.to_string()),
            views,
            excerpt: Some(excerpt.to_string()),
            author: Some(FIXTURE_AUTHOR.to_string()),
            published_at: Some(published_at.to_string()),
            slug: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_counts() {
        assert_eq!(programs().len(), 3);
        assert_eq!(projects().len(), 3);
        assert_eq!(blog_posts().len(), 5);
        assert_eq!(top_posts().len(), 5);
    }

    #[test]
    fn test_every_fixture_has_id_and_title() {
        let pairs = programs()
            .into_iter()
            .map(|p| (p.id, p.title))
            .chain(projects().into_iter().map(|p| (p.id, p.title)))
            .chain(blog_posts().into_iter().map(|p| (p.id, p.title)));
        for (id, title) in pairs {
            assert!(!id.is_empty());
            assert!(!title.is_empty());
        }
    }

    #[test]
    fn test_ordering() {
        let posts = blog_posts();
        assert_eq!(posts[0].category.as_deref(), Some("DevOps"));
        assert_eq!(posts[4].category.as_deref(), Some("Kinh nghiệm"));

        let views: Vec<u64> = top_posts().iter().map(|p| p.views).collect();
        assert!(views.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_project_without_image_degrades() {
        let chatbot = &projects()[2];
        assert!(chatbot.image().is_placeholder());
        assert_eq!(chatbot.route_key(), "chatbot-tu-van-tuyen-sinh");
    }
}
