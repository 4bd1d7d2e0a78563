use serde::Serialize;

use crate::models::camp::Role;

/// One rubric dimension: display name plus the hint shown under the stars.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Criterion {
    pub name: &'static str,
    pub description: &'static str,
}

pub const LEADER_CRITERIA: &[Criterion] = &[
    Criterion {
        name: "Năng lượng",
        description: "Mức độ tích cực, nhiệt tình trong hoạt động",
    },
    Criterion {
        name: "Kỷ luật",
        description: "Tuân thủ nội quy, quy định và thời gian",
    },
    Criterion {
        name: "Mức độ quan tâm/sẵn sàng",
        description: "Sự quan tâm đến người khác và sẵn sàng tham gia",
    },
    Criterion {
        name: "Giải quyết vấn đề",
        description: "Khả năng xử lý tình huống, giải quyết khó khăn",
    },
    Criterion {
        name: "Làm việc nhóm",
        description: "Khả năng hợp tác, chia sẻ và hỗ trợ người khác",
    },
    Criterion {
        name: "Giao tiếp",
        description: "Khả năng truyền đạt thông tin và lắng nghe",
    },
    Criterion {
        name: "Tâm lý độ tuổi kid",
        description: "Hiểu biết và ứng xử phù hợp với tâm lý trẻ em",
    },
    Criterion {
        name: "CISV Skills",
        description: "Kỹ năng đặc thù của CISV",
    },
];

pub const SUPPORTER_CRITERIA: &[Criterion] = &[
    Criterion {
        name: "Năng lượng",
        description: "Mức độ tích cực, nhiệt tình trong hoạt động",
    },
    Criterion {
        name: "Thái độ & sự tập trung",
        description: "Thái độ tôn trọng, lịch sự và khả năng tập trung",
    },
    Criterion {
        name: "Nhận thức bản thân",
        description: "Khả năng nhận biết điểm mạnh, điểm yếu và cảm xúc của bản thân",
    },
    Criterion {
        name: "Tư duy phản biện",
        description: "Khả năng phân tích, đánh giá và đưa ra ý kiến độc lập",
    },
    Criterion {
        name: "Teamwork",
        description: "Khả năng làm việc nhóm, hợp tác và đóng góp",
    },
    Criterion {
        name: "Giao tiếp & kết nối",
        description: "Khả năng giao tiếp, kết nối với người khác",
    },
    Criterion {
        name: "Truyền đạt kinh nghiệm",
        description: "Khả năng chia sẻ kinh nghiệm và kiến thức với người khác",
    },
];

pub fn criteria_for(role: Role) -> &'static [Criterion] {
    match role {
        Role::Leader => LEADER_CRITERIA,
        Role::Supporter => SUPPORTER_CRITERIA,
    }
}
