//! 服务层端到端测试
//!
//! 每个测试使用独立的内存 SQLite（连接池大小 1），迁移在存储构造时执行。

use std::sync::Arc;

use crate::errors::HWTrackerError;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::auth::requests::{LoginRequest, RegisterRequest};
use crate::models::classes::requests::{CreateClassRequest, UpdateClassRequest};
use crate::models::students::requests::{JoinClassRequest, UpdateStudentRequest};
use crate::models::submissions::entities::SubmissionStatus;
use crate::models::teachers::entities::Teacher;
use crate::services::notify::{Notifier, NullNotifier};
use crate::services::submissions::SubmissionActor;
use crate::services::{
    AssignmentService, AuthService, ClassService, EnrollmentService, SubmissionService,
};
use crate::storage::{Storage, create_storage_with_url};

async fn test_storage() -> Arc<dyn Storage> {
    create_storage_with_url("sqlite::memory:", 1)
        .await
        .expect("in-memory storage should initialize")
}

async fn register_teacher(storage: &Arc<dyn Storage>, username: &str) -> Teacher {
    AuthService::new(storage.clone())
        .register(RegisterRequest {
            username: username.to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .expect("registration should succeed")
}

fn assignment_service(storage: &Arc<dyn Storage>) -> AssignmentService {
    AssignmentService::new(storage.clone(), Arc::new(NullNotifier))
}

#[tokio::test]
async fn test_register_login_scenario() {
    let storage = test_storage().await;
    let auth = AuthService::new(storage.clone());

    let teacher = auth
        .register(RegisterRequest {
            username: "ms_lee".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(teacher.username, "ms_lee");

    // 正确口令登录成功并携带会话令牌
    let login = auth
        .login(LoginRequest {
            username: "ms_lee".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(login.teacher.id, teacher.id);
    assert!(!login.token.is_empty());

    // 错误口令与未知用户名同样返回 InvalidCredentials
    let wrong = auth
        .login(LoginRequest {
            username: "ms_lee".to_string(),
            password: "wrong".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(wrong, HWTrackerError::InvalidCredentials(_)));

    let unknown = auth
        .login(LoginRequest {
            username: "nobody".to_string(),
            password: "hunter22".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(unknown, HWTrackerError::InvalidCredentials(_)));

    // 重复注册返回 AlreadyExists
    let dup = auth
        .register(RegisterRequest {
            username: "ms_lee".to_string(),
            password: "whatever1".to_string(),
        })
        .await
        .unwrap_err();
    assert!(dup.is_already_exists());
}

#[tokio::test]
async fn test_create_class_code_shape_and_idempotent_join() {
    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());
    let enrollment = EnrollmentService::new(storage.clone());

    let class = classes
        .create(
            teacher.id,
            CreateClassRequest {
                name: "Algebra 1".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(class.access_code.len(), 6);
    assert!(
        class
            .access_code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );

    let first = enrollment
        .join(JoinClassRequest {
            name: "Ava".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap();

    // 小写带空白的码同样命中（查找前规范化）
    let second = enrollment
        .join(JoinClassRequest {
            name: "Ava".to_string(),
            access_code: format!(" {} ", class.access_code.to_lowercase()),
        })
        .await
        .unwrap();

    // 幂等加入：两次返回同一行，表中只有一条记录
    assert_eq!(first.student.id, second.student.id);
    assert_eq!(storage.list_students().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_join_unknown_code_is_not_found() {
    let storage = test_storage().await;
    let enrollment = EnrollmentService::new(storage.clone());

    let err = enrollment
        .join(JoinClassRequest {
            name: "Ava".to_string(),
            access_code: "ZZZZZZ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, HWTrackerError::NotFound(_)));
}

#[tokio::test]
async fn test_submission_toggle_keeps_single_row() {
    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());
    let enrollment = EnrollmentService::new(storage.clone());
    let assignments = assignment_service(&storage);
    let submissions = SubmissionService::new(storage.clone());

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "Bio".into() })
        .await
        .unwrap();
    let joined = enrollment
        .join(JoinClassRequest {
            name: "Ava".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap();
    let assignment = assignments
        .create(
            teacher.id,
            CreateAssignmentRequest {
                class_id: class.id,
                title: "Read chapter 3".to_string(),
                description: String::new(),
                due_date: None,
                notify: false,
            },
        )
        .await
        .unwrap();

    let actor = SubmissionActor::Student(joined.student.id);

    // done -> pending -> done：始终只有一行，终态 done 且完成时间非空
    let done = submissions
        .set_status(actor, assignment.id, joined.student.id, SubmissionStatus::Done)
        .await
        .unwrap();
    assert_eq!(done.status, SubmissionStatus::Done);
    assert!(done.completed_at.is_some());

    let pending = submissions
        .set_status(
            actor,
            assignment.id,
            joined.student.id,
            SubmissionStatus::Pending,
        )
        .await
        .unwrap();
    assert_eq!(pending.status, SubmissionStatus::Pending);
    assert!(pending.completed_at.is_none());

    let done_again = submissions
        .set_status(actor, assignment.id, joined.student.id, SubmissionStatus::Done)
        .await
        .unwrap();
    assert_eq!(done_again.status, SubmissionStatus::Done);
    assert!(done_again.completed_at.is_some());

    assert_eq!(storage.list_submissions().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_teacher_can_toggle_on_students_behalf() {
    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let outsider = register_teacher(&storage, "mr_diaz").await;
    let classes = ClassService::new(storage.clone());
    let enrollment = EnrollmentService::new(storage.clone());
    let assignments = assignment_service(&storage);
    let submissions = SubmissionService::new(storage.clone());

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "Art".into() })
        .await
        .unwrap();
    let joined = enrollment
        .join(JoinClassRequest {
            name: "Ben".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap();
    let assignment = assignments
        .create(
            teacher.id,
            CreateAssignmentRequest {
                class_id: class.id,
                title: "Sketch".to_string(),
                description: String::new(),
                due_date: None,
                notify: false,
            },
        )
        .await
        .unwrap();

    // 班级所有者可以代学生标记
    let done = submissions
        .set_status(
            SubmissionActor::Teacher(teacher.id),
            assignment.id,
            joined.student.id,
            SubmissionStatus::Done,
        )
        .await
        .unwrap();
    assert_eq!(done.status, SubmissionStatus::Done);

    // 学生本人撤销，收敛到同一行
    let undone = submissions
        .set_status(
            SubmissionActor::Student(joined.student.id),
            assignment.id,
            joined.student.id,
            SubmissionStatus::Pending,
        )
        .await
        .unwrap();
    assert_eq!(undone.id, done.id);

    // 非所有者教师被拒绝
    let err = submissions
        .set_status(
            SubmissionActor::Teacher(outsider.id),
            assignment.id,
            joined.student.id,
            SubmissionStatus::Done,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HWTrackerError::Unauthorized(_)));

    // 学生不能改别人的记录
    let err = submissions
        .set_status(
            SubmissionActor::Student(joined.student.id + 1),
            assignment.id,
            joined.student.id,
            SubmissionStatus::Done,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HWTrackerError::Unauthorized(_)));
}

#[tokio::test]
async fn test_delete_class_cascades_to_children() {
    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());
    let enrollment = EnrollmentService::new(storage.clone());
    let assignments = assignment_service(&storage);
    let submissions = SubmissionService::new(storage.clone());

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "Chem".into() })
        .await
        .unwrap();
    let joined = enrollment
        .join(JoinClassRequest {
            name: "Sam".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap();
    let assignment = assignments
        .create(
            teacher.id,
            CreateAssignmentRequest {
                class_id: class.id,
                title: "Lab report".to_string(),
                description: String::new(),
                due_date: None,
                notify: false,
            },
        )
        .await
        .unwrap();
    submissions
        .set_status(
            SubmissionActor::Student(joined.student.id),
            assignment.id,
            joined.student.id,
            SubmissionStatus::Done,
        )
        .await
        .unwrap();

    assert!(classes.delete(teacher.id, class.id).await.unwrap());

    // 班级及其学生、作业、提交全部不复存在
    assert!(storage.get_class_by_id(class.id).await.unwrap().is_none());
    assert!(
        storage
            .get_student_by_id(joined.student.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        storage
            .get_assignment_by_id(assignment.id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        storage
            .get_submission(assignment.id, joined.student.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_blank_title_rejected_without_insert() {
    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());
    let assignments = assignment_service(&storage);

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "Gym".into() })
        .await
        .unwrap();

    let before = storage.list_assignments().await.unwrap().len();
    let err = assignments
        .create(
            teacher.id,
            CreateAssignmentRequest {
                class_id: class.id,
                title: "   ".to_string(),
                description: String::new(),
                due_date: None,
                notify: false,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HWTrackerError::Validation(_)));
    assert_eq!(storage.list_assignments().await.unwrap().len(), before);
}

#[tokio::test]
async fn test_assignment_ordering_due_date_asc_nulls_last() {
    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());
    let enrollment = EnrollmentService::new(storage.clone());
    let assignments = assignment_service(&storage);

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "History".into() })
        .await
        .unwrap();
    let joined = enrollment
        .join(JoinClassRequest {
            name: "Ava".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap();

    for due in [
        None,
        chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 15),
    ] {
        assignments
            .create(
                teacher.id,
                CreateAssignmentRequest {
                    class_id: class.id,
                    title: format!("hw-{due:?}"),
                    description: String::new(),
                    due_date: due,
                    notify: false,
                },
            )
            .await
            .unwrap();
    }

    let listed = assignments
        .list_for_student(class.id, joined.student.id)
        .await
        .unwrap();
    let dues: Vec<Option<chrono::NaiveDate>> =
        listed.iter().map(|a| a.assignment.due_date).collect();
    assert_eq!(
        dues,
        vec![
            chrono::NaiveDate::from_ymd_opt(2024, 1, 15),
            chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
            None,
        ]
    );

    // 无提交记录时状态默认为 pending
    assert!(listed.iter().all(|a| a.status == SubmissionStatus::Pending));
}

#[tokio::test]
async fn test_regenerate_code_invalidates_old_one() {
    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());
    let enrollment = EnrollmentService::new(storage.clone());

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "Music".into() })
        .await
        .unwrap();
    let joined = enrollment
        .join(JoinClassRequest {
            name: "Ava".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap();

    let updated = classes.regenerate_code(teacher.id, class.id).await.unwrap();
    assert_ne!(updated.access_code, class.access_code);

    // 旧码立即失效
    let err = enrollment
        .join(JoinClassRequest {
            name: "Ben".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, HWTrackerError::NotFound(_)));

    // 新码可用；已加入学生不受影响
    enrollment
        .join(JoinClassRequest {
            name: "Ben".to_string(),
            access_code: updated.access_code.clone(),
        })
        .await
        .unwrap();
    assert!(
        storage
            .get_student_by_id(joined.student.id)
            .await
            .unwrap()
            .is_some()
    );

    // 非所有者不能换码
    let outsider = register_teacher(&storage, "mr_diaz").await;
    let err = classes
        .regenerate_code(outsider.id, class.id)
        .await
        .unwrap_err();
    assert!(matches!(err, HWTrackerError::Unauthorized(_)));
}

#[tokio::test]
async fn test_class_rename_and_roster() {
    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());
    let enrollment = EnrollmentService::new(storage.clone());

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "Drafts".into() })
        .await
        .unwrap();

    let renamed = classes
        .update(
            teacher.id,
            class.id,
            UpdateClassRequest {
                name: Some("Algebra 2".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "Algebra 2");
    // 重命名不触碰加入码
    assert_eq!(renamed.access_code, class.access_code);

    for name in ["Zoe", "Ava", "Ben"] {
        enrollment
            .join(JoinClassRequest {
                name: name.to_string(),
                access_code: class.access_code.clone(),
            })
            .await
            .unwrap();
    }

    // 名册按姓名排序
    let roster = enrollment.list(teacher.id, class.id).await.unwrap();
    let names: Vec<&str> = roster.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Ava", "Ben", "Zoe"]);

    // 教师移除学生
    let ben_id = roster[1].id;
    assert!(enrollment.remove(teacher.id, ben_id).await.unwrap());
    let roster = enrollment.list(teacher.id, class.id).await.unwrap();
    let names: Vec<&str> = roster.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Ava", "Zoe"]);

    // 非所有者无权查看名册或移除学生
    let outsider = register_teacher(&storage, "mr_diaz").await;
    assert!(matches!(
        enrollment.list(outsider.id, class.id).await.unwrap_err(),
        HWTrackerError::Unauthorized(_)
    ));
    assert!(matches!(
        enrollment.remove(outsider.id, roster[0].id).await.unwrap_err(),
        HWTrackerError::Unauthorized(_)
    ));
}

#[tokio::test]
async fn test_student_profile_update_and_roster_view() {
    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());
    let enrollment = EnrollmentService::new(storage.clone());
    let assignments = assignment_service(&storage);
    let submissions = SubmissionService::new(storage.clone());

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "CS".into() })
        .await
        .unwrap();
    let joined = enrollment
        .join(JoinClassRequest {
            name: "Ava".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap();

    let updated = enrollment
        .update_profile(
            joined.student.id,
            UpdateStudentRequest {
                name: None,
                email: Some("ava@example.com".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.email.as_deref(), Some("ava@example.com"));

    let err = enrollment
        .update_profile(
            joined.student.id,
            UpdateStudentRequest {
                name: None,
                email: Some("not-an-email".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, HWTrackerError::Validation(_)));

    let assignment = assignments
        .create(
            teacher.id,
            CreateAssignmentRequest {
                class_id: class.id,
                title: "Project".to_string(),
                description: String::new(),
                due_date: None,
                notify: false,
            },
        )
        .await
        .unwrap();
    submissions
        .set_status(
            SubmissionActor::Student(joined.student.id),
            assignment.id,
            joined.student.id,
            SubmissionStatus::Done,
        )
        .await
        .unwrap();

    let rows = submissions
        .list_for_assignment(teacher.id, assignment.id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].status, SubmissionStatus::Done);
    assert!(rows[0].completed_at.is_some());
}

#[tokio::test]
async fn test_notifier_failure_does_not_fail_creation() {
    struct FailingNotifier;

    #[async_trait::async_trait]
    impl Notifier for FailingNotifier {
        async fn notify_assignment_created(
            &self,
            _to_email: &str,
            _student_name: &str,
            _assignment: &crate::models::assignments::entities::Assignment,
        ) -> crate::errors::Result<()> {
            Err(HWTrackerError::notification("relay unavailable"))
        }
    }

    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());
    let enrollment = EnrollmentService::new(storage.clone());
    let assignments = AssignmentService::new(storage.clone(), Arc::new(FailingNotifier));

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "Lit".into() })
        .await
        .unwrap();
    let joined = enrollment
        .join(JoinClassRequest {
            name: "Ava".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap();
    enrollment
        .update_profile(
            joined.student.id,
            UpdateStudentRequest {
                name: None,
                email: Some("ava@example.com".to_string()),
            },
        )
        .await
        .unwrap();

    // 邮件中继失败不影响作业创建结果
    let assignment = assignments
        .create(
            teacher.id,
            CreateAssignmentRequest {
                class_id: class.id,
                title: "Essay".to_string(),
                description: "Two pages".to_string(),
                due_date: None,
                notify: true,
            },
        )
        .await
        .unwrap();
    assert!(
        storage
            .get_assignment_by_id(assignment.id)
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn test_notifier_receives_students_with_email() {
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingNotifier {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait::async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify_assignment_created(
            &self,
            to_email: &str,
            _student_name: &str,
            _assignment: &crate::models::assignments::entities::Assignment,
        ) -> crate::errors::Result<()> {
            self.sent.lock().unwrap().push(to_email.to_string());
            Ok(())
        }
    }

    let storage = test_storage().await;
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());
    let enrollment = EnrollmentService::new(storage.clone());
    let notifier = Arc::new(RecordingNotifier::default());
    let assignments = AssignmentService::new(storage.clone(), notifier.clone());

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "Geo".into() })
        .await
        .unwrap();

    // Ava 留邮箱，Ben 不留
    let ava = enrollment
        .join(JoinClassRequest {
            name: "Ava".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap();
    enrollment
        .update_profile(
            ava.student.id,
            UpdateStudentRequest {
                name: None,
                email: Some("ava@example.com".to_string()),
            },
        )
        .await
        .unwrap();
    enrollment
        .join(JoinClassRequest {
            name: "Ben".to_string(),
            access_code: class.access_code.clone(),
        })
        .await
        .unwrap();

    assignments
        .create(
            teacher.id,
            CreateAssignmentRequest {
                class_id: class.id,
                title: "Maps".to_string(),
                description: String::new(),
                due_date: None,
                notify: true,
            },
        )
        .await
        .unwrap();

    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.as_slice(), ["ava@example.com"]);
}

#[tokio::test]
async fn test_delete_teacher_cascades_to_classes() {
    let storage = test_storage().await;
    let auth = AuthService::new(storage.clone());
    let teacher = register_teacher(&storage, "ms_lee").await;
    let classes = ClassService::new(storage.clone());

    let class = classes
        .create(teacher.id, CreateClassRequest { name: "Econ".into() })
        .await
        .unwrap();

    assert!(auth.delete_account(teacher.id).await.unwrap());
    assert!(storage.get_class_by_id(class.id).await.unwrap().is_none());

    // 账号已不存在：再次注销返回 NotFound
    let err = auth.delete_account(teacher.id).await.unwrap_err();
    assert!(matches!(err, HWTrackerError::NotFound(_)));
}

#[tokio::test]
async fn test_admin_gate_denies_without_configured_secret() {
    let storage = test_storage().await;
    let admin = crate::services::AdminService::new(storage.clone());

    // 默认配置下管理口令为空串：任何输入都被拒绝
    let err = admin
        .dump_table("whatever", crate::services::admin::AdminTable::Teachers)
        .await
        .unwrap_err();
    assert!(matches!(err, HWTrackerError::Unauthorized(_)));
}
