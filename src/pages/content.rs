use crate::models::services::Faq;
use serde::Serialize;

#[derive(Serialize)]
pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub rating: u8,
}

#[derive(Serialize)]
pub struct Department {
    pub name: &'static str,
    pub icon: &'static str,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            text: "The care I received at MediCare was exceptional. Dr. Smith took the time to explain everything clearly.",
            author: "Rahul Sharma",
            rating: 5,
        },
        Testimonial {
            text: "Clean facility and friendly staff. My appointment was on time and the doctor was very thorough.",
            author: "Priya Patel",
            rating: 4,
        },
        Testimonial {
            text: "The pediatric department is amazing with kids. My daughter actually looks forward to her checkups!",
            author: "Anjali Mehta",
            rating: 5,
        },
    ]
}

pub fn departments() -> Vec<Department> {
    vec![
        Department {
            name: "Appointments",
            icon: "fas fa-calendar-check",
        },
        Department {
            name: "Billing",
            icon: "fas fa-file-invoice-dollar",
        },
        Department {
            name: "Medical Records",
            icon: "fas fa-file-medical",
        },
        Department {
            name: "General Inquiry",
            icon: "fas fa-question-circle",
        },
        Department {
            name: "Feedback",
            icon: "fas fa-comment-alt",
        },
    ]
}

pub fn contact_faqs() -> Vec<Faq> {
    [
        (
            "How do I schedule an appointment?",
            "You can schedule an appointment online through our website, by calling our office, or by visiting in person.",
        ),
        (
            "What insurance plans do you accept?",
            "We accept most major insurance plans. Please contact our billing department for specific information about your plan.",
        ),
        (
            "What should I bring to my first appointment?",
            "Please bring your insurance card, photo ID, list of current medications, and any relevant medical records.",
        ),
        (
            "Do you offer telehealth services?",
            "Yes, we offer telehealth services for many types of appointments. Please call to see if your visit can be conducted virtually.",
        ),
    ]
    .iter()
    .map(|(question, answer)| Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    })
    .collect()
}
