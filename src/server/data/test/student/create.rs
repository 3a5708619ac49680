use super::*;

/// Tests creating a profile linked to an identity.
///
/// Expected: Ok with enum codes decoded back into domain values
#[tokio::test]
async fn creates_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).build().await?;

    let repo = StudentRepository::new(db);
    let student = repo
        .create(CreateStudentParams {
            user_id: user.id,
            matriculation_code: "ET001".to_string(),
            last_name: "Rakoto".to_string(),
            first_name: "Jean".to_string(),
            major: Major::ComputerScience,
            level: AcademicLevel::L2,
            phone: Some("0341234567".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(student.user_id, user.id);
    assert_eq!(student.matriculation_code, "ET001");
    assert_eq!(student.major, Major::ComputerScience);
    assert_eq!(student.level, AcademicLevel::L2);
    assert_eq!(student.phone.as_deref(), Some("0341234567"));

    Ok(())
}

/// Tests the one-profile-per-code constraint.
///
/// Expected: Err for a second profile with the same matriculation code
#[tokio::test]
async fn rejects_duplicate_matriculation_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::Student)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first_user = UserFactory::new(db).build().await?;
    StudentFactory::new(db, first_user.id)
        .matriculation_code("ET001")
        .build()
        .await?;

    let second_user = UserFactory::new(db).build().await?;
    let repo = StudentRepository::new(db);
    let result = repo
        .create(CreateStudentParams {
            user_id: second_user.id,
            matriculation_code: "ET001".to_string(),
            last_name: "Rabe".to_string(),
            first_name: "Paul".to_string(),
            major: Major::Mathematics,
            level: AcademicLevel::L1,
            phone: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
