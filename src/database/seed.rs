use crate::models::{
    doctors::NewDoctor,
    services::{Faq, NewService},
};
use anyhow::Context;
use diesel::prelude::*;

fn sample_doctors() -> Vec<NewDoctor<'static>> {
    vec![
        NewDoctor {
            name: "Dr. Sarah Smith",
            specialty: "Cardiologist",
            description: "Cardiologist with 15+ years in cardiovascular care and preventive medicine.",
            image: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?auto=format&fit=crop&w=500&q=80",
            rating: 4.5,
            reviews: 128,
            availability: "Mon, Wed, Fri: 9AM - 5PM",
            likes: 124,
        },
        NewDoctor {
            name: "Dr. Michael Johnson",
            specialty: "Neurologist",
            description: "Expert neurologist specializing in brain and spinal cord disorders.",
            image: "https://images.unsplash.com/photo-1622253692010-333f2da6031d?auto=format&fit=crop&w=500&q=80",
            rating: 4.0,
            reviews: 95,
            availability: "Tue, Thu, Sat: 10AM - 6PM",
            likes: 98,
        },
        NewDoctor {
            name: "Dr. Emily Williams",
            specialty: "Pediatrician",
            description: "Pediatrician with a passion for child wellness and development.",
            image: "https://images.unsplash.com/photo-1594824476967-48c8b964273f?auto=format&fit=crop&w=500&q=80",
            rating: 5.0,
            reviews: 210,
            availability: "Mon-Fri: 8AM - 4PM",
            likes: 156,
        },
    ]
}

fn faq(question: &str, answer: &str) -> Faq {
    Faq {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

fn sample_services() -> anyhow::Result<Vec<NewService<'static>>> {
    let cardiology_procedures = [
        "Electrocardiogram (ECG)",
        "Echocardiogram",
        "Stress Testing",
        "Cardiac Catheterization",
        "Angioplasty and Stenting",
    ];
    let cardiology_faqs = [
        faq(
            "How often should I get my heart checked?",
            "Adults over 40 should have annual heart checkups, or more frequently if risk factors exist.",
        ),
        faq(
            "Are these procedures covered by insurance?",
            "Most diagnostic and therapeutic procedures are covered, but check with your provider.",
        ),
    ];
    let neurology_procedures = [
        "EEG (Electroencephalogram)",
        "EMG (Electromyography)",
        "Nerve Conduction Studies",
        "Botulinum Toxin Therapy",
        "Deep Brain Stimulation",
    ];
    let neurology_faqs = [faq(
        "What are signs I should see a neurologist?",
        "Persistent headaches, dizziness, numbness, or movement problems warrant evaluation.",
    )];

    Ok(vec![
        NewService {
            name: "Cardiology",
            icon: "fas fa-heartbeat",
            description: "Comprehensive heart care including diagnostics, treatment, and rehabilitation.",
            price_range: "150-500",
            likes: 245,
            long_description: "Our cardiology department provides state-of-the-art care for all heart conditions. We offer advanced diagnostic tools, minimally invasive procedures, and comprehensive rehabilitation programs.",
            procedures: serde_json::to_string(&cardiology_procedures)?,
            duration: "30-90 minutes depending on procedure",
            preparation: "Fasting for 8 hours before most tests",
            recovery_time: "Varies from same-day to several weeks",
            success_rate: "95% for most procedures",
            faqs: serde_json::to_string(&cardiology_faqs)?,
        },
        NewService {
            name: "Neurology",
            icon: "fas fa-brain",
            description: "Diagnosis and treatment of brain and nervous system disorders.",
            price_range: "200-600",
            likes: 189,
            long_description: "Our neurology specialists provide expert care for conditions affecting the brain, spinal cord, and peripheral nerves using the latest diagnostic and treatment technologies.",
            procedures: serde_json::to_string(&neurology_procedures)?,
            duration: "45-120 minutes",
            preparation: "Some tests require no special preparation",
            recovery_time: "Typically minimal",
            success_rate: "Varies by condition (80-95%)",
            faqs: serde_json::to_string(&neurology_faqs)?,
        },
    ])
}

/// Inserts the sample rows into each table that is still empty.
pub fn seed_if_empty(conn: &mut SqliteConnection) -> anyhow::Result<()> {
    use crate::schema::{doctors, services};

    conn.transaction(|conn| {
        let res = doctors::table
            .count()
            .get_result::<i64>(conn)
            .context("DB error")?;
        if res == 0 {
            for doctor in sample_doctors() {
                diesel::insert_into(doctors::table)
                    .values(&doctor)
                    .execute(conn)
                    .context("DB error")?;
            }
            log::info!("Seeded sample doctors");
        }

        let res = services::table
            .count()
            .get_result::<i64>(conn)
            .context("DB error")?;
        if res == 0 {
            for service in sample_services()? {
                diesel::insert_into(services::table)
                    .values(&service)
                    .execute(conn)
                    .context("DB error")?;
            }
            log::info!("Seeded sample services");
        }

        Ok(())
    })
}
