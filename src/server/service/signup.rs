use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::auth::SignupDto,
    server::{
        data::{
            matriculation::MatriculationRepository, student::StudentRepository,
            user::UserRepository,
        },
        error::{registry::RegistryError, signup::SignupError, AppError},
        model::{
            student::CreateStudentParams,
            user::{CreateUserParams, User},
        },
        service::{matriculation::MatriculationService, password},
    },
};

/// Student self-registration.
///
/// Creates the identity, the student profile and the matriculation
/// consumption flag as one atomic unit: either all three exist afterwards or
/// none do. The matriculation code doubles as the username.
pub struct SignupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new student.
    ///
    /// Validates the password confirmation and the matriculation code, then
    /// runs the three mutations in one transaction. The flag flip is
    /// conditioned on the entry still being unconsumed at write time, so of
    /// two concurrent signups with the same code exactly one commits; the
    /// loser's transaction rolls back and the precise registry reason is
    /// re-derived for the response.
    ///
    /// # Returns
    /// - `Ok(User)` - The created identity; the caller establishes the
    ///   session from it
    /// - `Err(SignupError::PasswordMismatch)` - Confirmation differs
    /// - `Err(RegistryError::_)` - Code absent, consumed or linked
    /// - `Err(AppError::DbErr)` - Storage failure, including unique
    ///   violations on username, email or matriculation code
    pub async fn signup(&self, dto: SignupDto) -> Result<User, AppError> {
        if dto.password != dto.password_confirm {
            return Err(SignupError::PasswordMismatch.into());
        }

        let registry = MatriculationService::new(self.db);
        registry.validate_for_signup(&dto.matriculation_code).await?;

        let password_hash = password::hash(&dto.password)?;

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn)
            .create(CreateUserParams {
                username: dto.matriculation_code.clone(),
                email: dto.email,
                password_hash,
                is_admin: false,
                is_student: true,
            })
            .await?;

        StudentRepository::new(&txn)
            .create(CreateStudentParams {
                user_id: user.id,
                matriculation_code: dto.matriculation_code.clone(),
                last_name: dto.last_name,
                first_name: dto.first_name,
                major: dto.major,
                level: dto.level,
                phone: dto.phone,
            })
            .await?;

        let consumed = MatriculationRepository::new(&txn)
            .mark_used_if_unused(&dto.matriculation_code)
            .await?;

        if !consumed {
            // Lost the consumption race after the pre-check. Undo everything
            // and report the state the winner left behind.
            txn.rollback().await?;
            registry.validate_for_signup(&dto.matriculation_code).await?;

            return Err(RegistryError::AlreadyUsed(dto.matriculation_code).into());
        }

        txn.commit().await?;

        tracing::info!("Registered student account '{}'", user.username);

        Ok(user)
    }
}
