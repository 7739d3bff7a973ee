use super::*;

/// Tests deleting a student.
///
/// Verifies that the repository removes the row and returns it as it was.
///
/// Expected: Ok with the deleted student, row gone from database
#[tokio::test]
async fn deletes_student_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo.delete(created.id).await?;

    assert_eq!(student.id, created.id);
    assert_eq!(student.name, created.name);
    assert_eq!(student.gender, created.gender);

    let db_student = Student::find_by_id(created.id).one(db).await?;
    assert!(db_student.is_none());

    Ok(())
}

/// Tests deleting a student that doesn't exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.delete(999999).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests deleting the same student twice.
///
/// Expected: Ok the first time, Err(DbErr::RecordNotFound) the second time
#[tokio::test]
async fn second_delete_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    repo.delete(created.id).await?;

    let result = repo.delete(created.id).await;
    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests deleting one student doesn't affect others.
///
/// Expected: Ok with only the target student deleted
#[tokio::test]
async fn deletes_without_affecting_others() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student1 = factory::create_student(db).await?;
    let student2 = factory::create_student(db).await?;
    let student3 = factory::create_student(db).await?;

    let repo = StudentRepository::new(db);
    repo.delete(student2.id).await?;

    assert!(Student::find_by_id(student1.id).one(db).await?.is_some());
    assert!(Student::find_by_id(student2.id).one(db).await?.is_none());
    assert!(Student::find_by_id(student3.id).one(db).await?.is_some());

    Ok(())
}
